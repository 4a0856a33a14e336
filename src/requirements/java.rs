//! Java requirement reader.
//!
//! Maven `pom.xml` is consulted first: the `maven.compiler.release`,
//! `java.version` and `maven.compiler.target` properties, then the
//! `maven-compiler-plugin` `<target>` configuration. Gradle build scripts
//! (`build.gradle`, then `build.gradle.kts`) follow, using
//! `sourceCompatibility`.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;
use tracing::debug;

use super::requirement::{Ecosystem, Requirement};
use crate::detection::file_exists;

static SOURCE_COMPATIBILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"sourceCompatibility\s*=\s*(?:JavaVersion\.VERSION_(\d+)|["'](\d+)["'])"#).unwrap()
});

const POM_PROPERTIES: [&str; 3] = [
    "maven.compiler.release",
    "java.version",
    "maven.compiler.target",
];

const GRADLE_FILES: [&str; 2] = ["build.gradle", "build.gradle.kts"];

/// Read the Java requirement, if any build file declares one.
pub fn read(project_root: &Path) -> Option<Requirement> {
    if let Some(value) = read_pom(project_root) {
        debug!("Java requirement from pom.xml: {}", value);
        return Some(Requirement::new(Ecosystem::Java, "pom.xml", &value));
    }

    GRADLE_FILES.iter().find_map(|file| {
        let value = read_gradle(project_root, file)?;
        debug!("Java requirement from {}: {}", file, value);
        Some(Requirement::new(Ecosystem::Java, file, &value))
    })
}

fn read_pom(project_root: &Path) -> Option<String> {
    if !file_exists(project_root, "pom.xml") {
        return None;
    }
    let content = fs::read_to_string(project_root.join("pom.xml")).ok()?;
    let document = XmlElement::parse(&content)?;

    let properties = document.find_first("properties");
    let from_properties = properties.and_then(|props| {
        POM_PROPERTIES.iter().find_map(|name| {
            props
                .children
                .iter()
                .find(|child| child.name == *name)
                .map(|child| child.text_content().trim().to_string())
                .filter(|value| !value.is_empty())
        })
    });

    from_properties.or_else(|| compiler_plugin_target(&document))
}

fn compiler_plugin_target(document: &XmlElement) -> Option<String> {
    let mut plugins = Vec::new();
    document.find_all("plugin", &mut plugins);

    plugins.into_iter().find_map(|plugin| {
        let artifact = plugin.find_first("artifactId")?;
        if artifact.text_content().trim() != "maven-compiler-plugin" {
            return None;
        }
        let target = plugin.find_first("configuration")?.find_first("target")?;
        let value = target.text_content().trim().to_string();
        (!value.is_empty()).then_some(value)
    })
}

fn read_gradle(project_root: &Path, file: &str) -> Option<String> {
    if !file_exists(project_root, file) {
        return None;
    }
    let content = fs::read_to_string(project_root.join(file)).ok()?;
    let caps = SOURCE_COMPATIBILITY.captures(&content)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Minimal element tree built from quick-xml events.
#[derive(Debug, Default)]
struct XmlElement {
    name: String,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parse a document into a synthetic root holding the top-level element.
    /// Malformed XML yields `None`.
    fn parse(content: &str) -> Option<XmlElement> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut stack = vec![XmlElement::default()];
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => stack.push(XmlElement::named(e)),
                Ok(Event::Empty(ref e)) => {
                    let element = XmlElement::named(e);
                    stack.last_mut()?.children.push(element);
                }
                Ok(Event::Text(ref e)) => {
                    let text = e.unescape().ok()?;
                    stack.last_mut()?.text.push_str(&text);
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    stack.last_mut()?.text.push_str(&text);
                }
                Ok(Event::End(_)) => {
                    let element = stack.pop()?;
                    stack.last_mut()?.children.push(element);
                }
                Ok(Event::Eof) => break,
                Err(_) => return None,
                _ => {}
            }
            buf.clear();
        }

        if stack.len() == 1 {
            stack.pop()
        } else {
            None
        }
    }

    fn named(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.name().local_name().as_ref()).into_owned(),
            ..Self::default()
        }
    }

    /// Own text plus all descendant text.
    fn text_content(&self) -> String {
        let mut text = self.text.clone();
        for child in &self.children {
            text.push_str(&child.text_content());
        }
        text
    }

    /// First descendant with `name`, in document order.
    fn find_first(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find_map(|child| {
            if child.name == name {
                Some(child)
            } else {
                child.find_first(name)
            }
        })
    }

    /// All descendants with `name`, in document order.
    fn find_all<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.find_all(name, found);
        }
    }
}
