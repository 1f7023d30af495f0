//! Artisan dashboard catalog editor.

use handloom_admin::{CatalogEditor, EditorSubmission};
use handloom_core::ProductId;

use super::{CommandResult, Page, not_mounted};
use crate::storage::JsonFileStorage;
use crate::terminal::{TerminalEditor, TerminalGrid};

type Editor = CatalogEditor<JsonFileStorage, TerminalGrid, TerminalEditor>;

/// Form fields given on the command line. `None` leaves the field as the
/// editor populated it.
#[derive(Debug, Clone, Default)]
pub struct FormEdits {
    pub name: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub description: Option<String>,
}

impl FormEdits {
    fn apply(self, form: &mut EditorSubmission) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(price) = self.price {
            form.price = price;
        }
        if let Some(stock) = self.stock {
            form.stock = stock;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
    }
}

fn mount(page: &Page) -> Result<Editor, Box<dyn std::error::Error>> {
    CatalogEditor::mount(
        page.storage.clone(),
        TerminalGrid::new(&page.grid),
        TerminalEditor::default(),
    )
    .ok_or_else(|| not_mounted("catalog editor"))
}

fn page_lines(editor: &Editor) -> Vec<String> {
    let mut lines = editor.grid().lines();
    lines.extend(editor.panel().lines());
    lines
}

/// Show the grid with saved entries applied.
pub fn list(page: &Page) -> CommandResult {
    Ok(page_lines(&mount(page)?))
}

/// Open the editor for the card `id`.
pub fn edit(page: &Page, id: &str) -> CommandResult {
    let id = ProductId::parse(id)?;
    let mut editor = mount(page)?;
    editor
        .open_editor(&id)
        .ok_or_else(|| format!("No product card for {id}"))?;
    Ok(page_lines(&editor))
}

/// Open the editor for `id`, apply `edits` to the form, and submit it.
pub fn save(page: &Page, id: &str, edits: FormEdits) -> CommandResult {
    let id = ProductId::parse(id)?;
    let mut editor = mount(page)?;
    let draft = editor
        .open_editor(&id)
        .ok_or_else(|| format!("No product card for {id}"))?;

    let mut form = EditorSubmission::from(&draft);
    edits.apply(&mut form);
    editor.save(&form)?;

    let mut lines = vec![format!("Saved {id}")];
    lines.extend(page_lines(&editor));
    Ok(lines)
}
