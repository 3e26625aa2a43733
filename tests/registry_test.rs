use synopsis::entry::EntryInput;
use synopsis::error::Error;
use synopsis::paths::PathResolver;
use synopsis::registry::Registry;
use synopsis::template::Template;

const EXAMPLE: &str = "<html>[CHARACTER-NAME]<!-- entry-begin --> Entry [BOOK-ID]: [BOOK-TITLE] <!-- entry-end --></html>";

fn registry(raw: &str) -> Registry {
    Registry::new(Template::extract(raw).unwrap(), PathResolver::new(std::env::temp_dir()))
}

fn input(id: &str, character: &str, title: &str) -> EntryInput {
    EntryInput {
        id: id.to_string(),
        character: character.to_string(),
        title: title.to_string(),
        file_path: format!("books/{id}.pdf"),
        image_path: format!("covers/{id}.jpg"),
        synopsis: format!("Synopsis of {title}."),
        use_relative_paths: false,
    }
}

#[test]
fn test_example_document() {
    let mut registry = registry(EXAMPLE);
    let count = registry.add_or_update(&input("1", "Alice", "Moby Dick")).unwrap();

    assert_eq!(count, 1);
    assert_eq!(registry.render_document(), "<html>Alice Entry 1: Moby Dick </html>");
}

#[test]
fn test_render_is_idempotent() {
    let mut registry = registry(EXAMPLE);
    registry.add_or_update(&input("1", "Alice", "Moby Dick")).unwrap();
    registry.add_or_update(&input("2", "Alice", "Emma")).unwrap();

    assert_eq!(registry.render_document(), registry.render_document());
}

#[test]
fn test_insertion_order_is_preserved() {
    let mut registry = registry("<!-- entry-begin -->[BOOK-ID]<!-- entry-end -->");
    for id in ["b", "a", "c"] {
        registry.add_or_update(&input(id, "Alice", "Title")).unwrap();
    }

    assert_eq!(registry.render_document(), "b\na\nc");
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["b", "a", "c"]);
}

#[test]
fn test_update_keeps_position() {
    let mut registry = registry("<!-- entry-begin -->[BOOK-ID]=[BOOK-TITLE]<!-- entry-end -->");
    registry.add_or_update(&input("x", "Alice", "First")).unwrap();
    registry.add_or_update(&input("y", "Alice", "Second")).unwrap();
    let count = registry.add_or_update(&input("x", "Alice", "Renamed")).unwrap();

    assert_eq!(count, 2);
    assert_eq!(registry.render_document(), "x=Renamed\ny=Second");
    assert_eq!(registry.get("x").unwrap().title, "Renamed");
}

#[test]
fn test_character_is_locked_by_first_entry() {
    let mut registry = registry(EXAMPLE);
    registry.add_or_update(&input("1", "Alice", "Moby Dick")).unwrap();
    registry.add_or_update(&input("2", "Bob", "Emma")).unwrap();

    let document = registry.render_document();
    assert!(document.starts_with("<html>Alice"));
    assert!(!document.contains("Bob"));
    assert_eq!(registry.character(), Some("Alice"));
    assert!(registry.is_character_locked());
}

#[test]
fn test_character_placeholder_in_entry_pattern_uses_locked_value() {
    let mut registry = registry("<!-- entry-begin -->[CHARACTER-NAME]:[BOOK-ID]<!-- entry-end -->");
    registry.add_or_update(&input("1", "Alice", "Moby Dick")).unwrap();
    registry.add_or_update(&input("2", "Bob", "Emma")).unwrap();

    assert_eq!(registry.render_document(), "Alice:1\nAlice:2");
}

#[test]
fn test_all_placeholders_are_substituted() {
    let mut registry = registry(
        "<!-- entry-begin -->[BOOK-ID]|[BOOK-TITLE]|[FILE-PATH]|[IMAGE-PATH]|[BOOK-SYNOPSIS]<!-- entry-end -->",
    );
    registry.add_or_update(&input("7", "Alice", "Emma")).unwrap();

    let entry = registry.get("7").unwrap();
    assert!(!entry.rendered_html.contains('['));
    assert!(entry.rendered_html.starts_with("7|Emma|file://"));
    assert!(entry.rendered_html.contains("books/7.pdf|file://"));
    assert!(entry.rendered_html.ends_with("covers/7.jpg|Synopsis of Emma."));
}

#[test]
fn test_relative_paths() {
    let mut registry = registry("<!-- entry-begin -->[FILE-PATH] [IMAGE-PATH]<!-- entry-end -->");
    let entry = EntryInput { use_relative_paths: true, ..input("1", "Alice", "Emma") };
    registry.add_or_update(&entry).unwrap();

    assert_eq!(registry.render_document(), "books/1.pdf covers/1.jpg");
}

#[test]
fn test_remove() {
    let mut registry = registry("<!-- entry-begin -->[BOOK-ID]<!-- entry-end -->");
    for id in ["a", "b", "c"] {
        registry.add_or_update(&input(id, "Alice", "Title")).unwrap();
    }

    let removed = registry.remove("b").unwrap();
    assert_eq!(removed.id, "b");
    assert_eq!(registry.count(), 2);
    assert_eq!(registry.render_document(), "a\nc");

    // Re-adding puts the entry at the end.
    registry.add_or_update(&input("b", "Alice", "Title")).unwrap();
    assert_eq!(registry.render_document(), "a\nc\nb");
}

#[test]
fn test_remove_unknown_id() {
    let mut registry = registry(EXAMPLE);
    registry.add_or_update(&input("1", "Alice", "Moby Dick")).unwrap();

    assert!(registry.remove("nonexistent").is_none());
    assert_eq!(registry.count(), 1);
}

#[test]
fn test_reset() {
    let mut registry = registry(EXAMPLE);
    registry.add_or_update(&input("1", "Alice", "Moby Dick")).unwrap();
    registry.add_or_update(&input("2", "Alice", "Emma")).unwrap();
    registry.reset();

    assert_eq!(registry.count(), 0);
    assert!(registry.is_empty());
    assert!(!registry.is_character_locked());
    assert_eq!(registry.character(), None);
    // The substituted character stays in the residual document.
    assert_eq!(registry.render_document(), "<html>Alice</html>");
}

#[test]
fn test_reset_does_not_restore_character_placeholder() {
    let mut registry = registry(EXAMPLE);
    registry.add_or_update(&input("1", "Alice", "Moby Dick")).unwrap();
    registry.reset();
    registry.add_or_update(&input("2", "Bob", "Emma")).unwrap();

    assert_eq!(registry.character(), Some("Bob"));
    assert_eq!(registry.render_document(), "<html>Alice Entry 2: Emma </html>");
}

#[test]
fn test_empty_registry_renders_residual() {
    let registry = registry(EXAMPLE);
    assert_eq!(registry.count(), 0);
    assert_eq!(registry.render_document(), "<html>[CHARACTER-NAME]</html>");
}

#[test]
fn test_invalid_input_leaves_registry_unchanged() {
    let mut registry = registry(EXAMPLE);
    let entry = EntryInput { synopsis: String::new(), ..input("1", "Alice", "Moby Dick") };

    assert!(matches!(
        registry.add_or_update(&entry),
        Err(Error::ValidationError { field: "synopsis" })
    ));
    assert_eq!(registry.count(), 0);
    assert!(!registry.is_character_locked());
    assert_eq!(registry.residual().to_string(), "<html>[CHARACTER-NAME][ENTRIES-HTML]</html>");
}

#[test]
fn test_values_containing_tokens_are_literal() {
    let mut registry = registry("<!-- entry-begin -->[BOOK-TITLE]/[BOOK-ID]<!-- entry-end -->");
    registry.add_or_update(&input("1", "Alice", "[BOOK-ID]")).unwrap();

    assert_eq!(registry.render_document(), "[BOOK-ID]/1");
}

#[test]
fn test_character_containing_insertion_marker() {
    let mut registry =
        registry("<h1>[CHARACTER-NAME]</h1><ul><!-- entry-begin -->[BOOK-ID]<!-- entry-end --></ul>");
    registry.add_or_update(&input("1", "[ENTRIES-HTML]", "Moby Dick")).unwrap();

    assert_eq!(registry.render_document(), "<h1>[ENTRIES-HTML]</h1><ul>1</ul>");
}
