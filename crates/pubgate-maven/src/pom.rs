//! POM rendering for a publication.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use pubgate_core::publication::{Coordinates, PomDeveloper, PomLicense, PomScm, Publication};
use pubgate_util::errors::PubgateError;

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Render the POM for `publication` under `coords`.
///
/// Absent fields are omitted. `<licenses>`, `<developers>` and `<scm>` are
/// only written when at least one of their fields is set.
pub fn render_pom(publication: &Publication, coords: &Coordinates) -> miette::Result<String> {
    let mut w = PomWriter::new();
    let pom = &publication.pom;

    w.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    w.event(Event::Start(BytesStart::new("project").with_attributes([
        ("xmlns", POM_NAMESPACE),
        ("xmlns:xsi", XSI_NAMESPACE),
        ("xsi:schemaLocation", POM_SCHEMA_LOCATION),
    ])))?;

    w.text("modelVersion", "4.0.0")?;
    w.text("groupId", coords.group_id())?;
    w.text("artifactId", coords.artifact_id())?;
    w.text("version", coords.version())?;
    w.optional("packaging", pom.packaging.as_deref())?;
    w.optional("name", pom.name.as_deref())?;
    w.optional("description", pom.description.as_deref())?;
    w.optional("url", pom.url.as_deref())?;

    let licenses: Vec<&PomLicense> = pom.licenses.iter().filter(|l| l.name.is_some()).collect();
    if !licenses.is_empty() {
        w.start("licenses")?;
        for license in licenses {
            w.start("license")?;
            w.optional("name", license.name.as_deref())?;
            w.end("license")?;
        }
        w.end("licenses")?;
    }

    let developers: Vec<&PomDeveloper> = pom
        .developers
        .iter()
        .filter(|d| d.id.is_some() || d.name.is_some())
        .collect();
    if !developers.is_empty() {
        w.start("developers")?;
        for dev in developers {
            w.start("developer")?;
            w.optional("id", dev.id.as_deref())?;
            w.optional("name", dev.name.as_deref())?;
            w.end("developer")?;
        }
        w.end("developers")?;
    }

    if has_scm(&pom.scm) {
        w.start("scm")?;
        w.optional("connection", pom.scm.connection.as_deref())?;
        w.optional("developerConnection", pom.scm.developer_connection.as_deref())?;
        w.optional("url", pom.scm.url.as_deref())?;
        w.end("scm")?;
    }

    w.end("project")?;
    w.finish()
}

fn has_scm(scm: &PomScm) -> bool {
    scm.url.is_some() || scm.connection.is_some() || scm.developer_connection.is_some()
}

struct PomWriter {
    writer: Writer<Vec<u8>>,
}

impl PomWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> miette::Result<()> {
        self.writer.write_event(event).map_err(|e| {
            PubgateError::Generic {
                message: format!("Failed to write POM XML: {e}"),
            }
            .into()
        })
    }

    fn start(&mut self, tag: &str) -> miette::Result<()> {
        self.event(Event::Start(BytesStart::new(tag)))
    }

    fn end(&mut self, tag: &str) -> miette::Result<()> {
        self.event(Event::End(BytesEnd::new(tag)))
    }

    fn text(&mut self, tag: &str, value: &str) -> miette::Result<()> {
        self.start(tag)?;
        self.event(Event::Text(BytesText::new(value)))?;
        self.end(tag)
    }

    fn optional(&mut self, tag: &str, value: Option<&str>) -> miette::Result<()> {
        match value {
            Some(v) => self.text(tag, v),
            None => Ok(()),
        }
    }

    fn finish(self) -> miette::Result<String> {
        let mut xml = String::from_utf8(self.writer.into_inner()).map_err(|e| {
            PubgateError::Generic {
                message: format!("POM is not valid UTF-8: {e}"),
            }
        })?;
        xml.push('\n');
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubgate_core::config::PomFields;
    use pubgate_core::publication::PomDocument;

    fn publication(fields: &PomFields) -> (Publication, Coordinates) {
        let mut publication = Publication {
            name: "default".to_string(),
            group_id: None,
            artifact_id: "apollo-api".to_string(),
            version: None,
            component: None,
            pom: PomDocument::default(),
        };
        publication.apply_pom_defaults(Some("com.apollographql"), Some("4.0.0"), fields);
        let coords = publication.coordinates().unwrap();
        (publication, coords)
    }

    #[test]
    fn full_pom_contains_every_field() {
        let fields = PomFields {
            name: Some("Apollo API".to_string()),
            packaging: Some("jar".to_string()),
            description: Some("GraphQL client".to_string()),
            url: Some("https://github.com/clebrain/apollo-kotlin".to_string()),
            scm_url: Some("https://github.com/clebrain/apollo-kotlin".to_string()),
            scm_connection: Some("scm:git:git://github.com/clebrain/apollo-kotlin.git".to_string()),
            scm_developer_connection: Some("scm:git:ssh://github.com/clebrain/apollo-kotlin.git".to_string()),
            licence_name: Some("MIT License".to_string()),
            developer_id: Some("clebrain".to_string()),
            developer_name: Some("Clebrain Team".to_string()),
        };
        let (publication, coords) = publication(&fields);
        let xml = render_pom(&publication, &coords).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<modelVersion>4.0.0</modelVersion>"));
        assert!(xml.contains("<groupId>com.apollographql</groupId>"));
        assert!(xml.contains("<artifactId>apollo-api</artifactId>"));
        assert!(xml.contains("<version>4.0.0</version>"));
        assert!(xml.contains("<packaging>jar</packaging>"));
        assert!(xml.contains("<name>Apollo API</name>"));
        assert!(xml.contains("<description>GraphQL client</description>"));
        assert!(xml.contains("<name>MIT License</name>"));
        assert!(xml.contains("<id>clebrain</id>"));
        assert!(xml.contains("<name>Clebrain Team</name>"));
        assert!(xml.contains(
            "<developerConnection>scm:git:ssh://github.com/clebrain/apollo-kotlin.git</developerConnection>"
        ));
        assert!(xml.trim_end().ends_with("</project>"));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let (publication, coords) = publication(&PomFields::default());
        let xml = render_pom(&publication, &coords).unwrap();
        assert!(xml.contains("<artifactId>apollo-api</artifactId>"));
        assert!(!xml.contains("<packaging>"));
        assert!(!xml.contains("<name>"));
        assert!(!xml.contains("<licenses>"));
        assert!(!xml.contains("<developers>"));
        assert!(!xml.contains("<scm>"));
    }

    #[test]
    fn text_is_escaped() {
        let fields = PomFields {
            description: Some("Queries & <mutations>".to_string()),
            ..PomFields::default()
        };
        let (publication, coords) = publication(&fields);
        let xml = render_pom(&publication, &coords).unwrap();
        assert!(xml.contains("Queries &amp; &lt;mutations&gt;"));
    }
}
