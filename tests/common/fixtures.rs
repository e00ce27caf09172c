use lienzo::{
    Category, ContentVariant, ProjectRecord, SiteContent,
    contact::{ContactForm, ContactSession, ContactTransport, FormField},
    models::{Color, ProjectLinks},
    navigation::{PageLayout, SectionMetrics, Viewport},
};
use tempfile::NamedTempFile;

/// Creates a project record with placeholder copy and links.
pub fn make_record(id: u32, category: Category, featured: bool) -> ProjectRecord {
    ProjectRecord {
        id,
        title: format!("Project {id}"),
        description: format!("Description of project {id}"),
        category,
        tech: vec!["Rust".to_string()],
        featured,
        accent: (TEST_PINK, TEST_BLUE),
        links: ProjectLinks {
            demo: "#".to_string(),
            repo: "#".to_string(),
        },
    }
}

/// The three-record catalog: 1 web featured, 2 mobile, 3 web.
pub fn scenario_records() -> Vec<ProjectRecord> {
    vec![
        make_record(1, Category::Web, true),
        make_record(2, Category::Mobile, false),
        make_record(3, Category::Web, false),
    ]
}

pub fn ids(records: &[&ProjectRecord]) -> Vec<u32> {
    records.iter().map(|record| record.id).collect()
}

/// Color constants for tests
pub const TEST_PINK: Color = Color::rgb(0xff, 0x1e, 0x56);
pub const TEST_BLUE: Color = Color::rgb(0x00, 0xd9, 0xff);

/// Desktop layout with every built-in project visible.
pub fn desktop_layout(visible_cards: usize) -> PageLayout {
    PageLayout::compute(
        Viewport::new(1280.0, 800.0),
        &SectionMetrics::default(),
        visible_cards,
    )
}

const FILLED_FIELDS: [(FormField, &str); 4] = [
    (FormField::Name, "Ada"),
    (FormField::Email, "ada@example.com"),
    (FormField::Subject, "Visita"),
    (FormField::Message, "Nos vemos en la inauguración."),
];

/// A contact form with all four fields filled in.
pub fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    for (field, value) in FILLED_FIELDS {
        form.set(field, value);
    }
    form
}

/// A contact session over `transport` with all four fields filled in.
pub fn filled_session<T: ContactTransport>(transport: T) -> ContactSession<T> {
    let mut session = ContactSession::new(transport);
    for (field, value) in FILLED_FIELDS {
        session.set(field, value);
    }
    session
}

/// Writes `source` to a temporary `.toml` file.
/// The file is removed when the handle is dropped.
pub fn write_content_file(source: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp content file");
    std::fs::write(file.path(), source).expect("Failed to write temp content file");
    file
}

/// Raw TOML of a built-in variant, round-tripped through the serializer.
pub fn builtin_toml(variant: ContentVariant) -> String {
    SiteContent::builtin(variant)
        .expect("Built-in content should parse")
        .to_toml_string()
        .expect("Built-in content should serialize")
}
