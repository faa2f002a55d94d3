//! Integration tests for the single-field item variant.

mod common;

use std::sync::Arc;

use common::*;

async fn create_item_editor() -> Editor<Item, MemoryStore> {
    Editor::load(Arc::new(MemoryStore::new())).await
}

#[tokio::test]
async fn test_add_rename_delete_item() -> anyhow::Result<()> {
    let mut editor = create_item_editor().await;

    editor.set_field(ItemField::Name, "  eggs  ".to_string());
    let (notice, write) = editor.submit();
    assert_eq!(notice, Notice::Added);
    write.expect("valid submission writes").await?;
    assert_eq!(editor.records().len(), 1);
    assert_eq!(editor.records()[0].name, "eggs");

    let id = editor.records()[0].id.clone();
    assert!(editor.edit(&id));
    assert_eq!(editor.form().draft(), &ItemDraft { name: "eggs".to_string() });
    editor.set_field(ItemField::Name, "free-range eggs".to_string());
    let (notice, write) = editor.submit();
    assert_eq!(notice, Notice::Updated);
    write.expect("valid submission writes").await?;
    assert_eq!(editor.records()[0].name, "free-range eggs");
    assert_eq!(editor.records()[0].id, id);

    let (_, write) = editor.confirm_delete(&id);
    write.await?;
    assert!(editor.records().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_blank_item_name_rejected() {
    let mut editor = create_item_editor().await;
    for name in ["", "   ", "\t"] {
        editor.set_field(ItemField::Name, name.to_string());
        let (notice, write) = editor.submit();
        assert_eq!(notice, Notice::Invalid(ValidationError::EmptyName));
        assert!(write.is_none());
    }
    assert!(editor.records().is_empty());
}

#[tokio::test]
async fn test_item_list_view() -> anyhow::Result<()> {
    let mut editor = create_item_editor().await;
    for name in ["milk", "bread"] {
        editor.set_field(ItemField::Name, name.to_string());
        let (_, write) = editor.submit();
        write.expect("valid submission writes").await?;
    }

    let view = editor.list_view();
    assert_eq!(view.title(), "Items List");
    assert_eq!(view.header(), vec!["Name", "Actions"]);
    let rows = view.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells, vec!["milk"]);
    assert_eq!(rows[1].cells, vec!["bread"]);
    assert_eq!(rows[1].id, editor.records()[1].id);
    Ok(())
}
