//! Book Finder Desktop - Tauri commands and app setup

use base64::Engine;
use bookfinder_core::{ApiConfig, BookRecord, CoverSize, SearchClient, SearchOutcome};
use serde::Serialize;
use std::sync::Mutex;
use tauri::State;

/// Application state
///
/// The last result set is the only state carried between commands: it is
/// replaced wholesale on every search and read by the detail view, which
/// addresses records by row index.
pub struct AppState {
    client: SearchClient,
    results: Mutex<Vec<BookRecord>>,
}

impl AppState {
    fn new() -> Self {
        Self {
            client: SearchClient::new(ApiConfig::default()),
            results: Mutex::new(Vec::new()),
        }
    }
}

/// One table row for the frontend list view
#[derive(Debug, Clone, Serialize)]
pub struct BookRow {
    pub title: String,
    pub author: String,
    pub year: String,
    /// Present when a cover exists; the frontend uses this to decide
    /// between opening the detail window and the no-cover dialog
    pub cover_id: Option<i64>,
}

impl From<&BookRecord> for BookRow {
    fn from(record: &BookRecord) -> Self {
        Self {
            title: record.title.clone(),
            author: record.author_line(),
            year: record.year_display(),
            cover_id: record.cover_id,
        }
    }
}

/// Detail window payload with the large cover inlined
#[derive(Debug, Serialize)]
pub struct BookDetail {
    pub title: String,
    pub author: String,
    pub year: String,
    /// `data:image/jpeg;base64,…` URL, absent when the book has no cover
    pub cover: Option<String>,
}

/// Get application version
#[tauri::command]
fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Search by title and replace the stored result set
///
/// Returns up to 20 display rows; an empty vec means the API had no hits
/// and the frontend shows its informational dialog. Empty input and fetch
/// failures come back as the error string for the warning/error dialogs.
#[tauri::command]
async fn search_books(query: String, state: State<'_, AppState>) -> Result<Vec<BookRow>, String> {
    let outcome = state
        .client
        .search(&query)
        .await
        .map_err(|e| e.to_string())?;

    let records = match outcome {
        SearchOutcome::NoResults => Vec::new(),
        SearchOutcome::Results(records) => records,
    };
    let rows = records.iter().map(BookRow::from).collect();

    *state.results.lock().map_err(|e| e.to_string())? = records;

    Ok(rows)
}

/// Look up a stored record by row index and fetch its large cover
#[tauri::command]
async fn book_detail(index: usize, state: State<'_, AppState>) -> Result<BookDetail, String> {
    let record = {
        let results = state.results.lock().map_err(|e| e.to_string())?;
        results
            .get(index)
            .cloned()
            .ok_or_else(|| "No book at this row".to_string())?
    };

    let cover = match record.cover_id {
        Some(cover_id) => {
            let bytes = state
                .client
                .fetch_cover(cover_id, CoverSize::Large)
                .await
                .map_err(|e| e.to_string())?;
            Some(format!(
                "data:image/jpeg;base64,{}",
                base64::engine::general_purpose::STANDARD.encode(bytes)
            ))
        }
        None => None,
    };

    Ok(BookDetail {
        title: record.title.clone(),
        author: record.author_line(),
        year: record.year_display(),
        cover,
    })
}

fn create_menu(app: &tauri::AppHandle) -> Result<tauri::menu::Menu<tauri::Wry>, tauri::Error> {
    use tauri::menu::{MenuBuilder, MenuItemBuilder, SubmenuBuilder};

    let quit_item = MenuItemBuilder::with_id("quit", "Quit")
        .accelerator("CmdOrCtrl+Q")
        .build(app)?;

    let file_menu = SubmenuBuilder::new(app, "File").item(&quit_item).build()?;

    let about_item = MenuItemBuilder::with_id("about", "About Book Finder").build(app)?;

    let help_menu = SubmenuBuilder::new(app, "Help").item(&about_item).build()?;

    let menu = MenuBuilder::new(app)
        .item(&file_menu)
        .item(&help_menu)
        .build()?;

    Ok(menu)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(AppState::new())
        .setup(|app| {
            // Create and set the menu
            let menu = create_menu(app.handle())?;
            app.set_menu(menu)?;

            Ok(())
        })
        .on_menu_event(|app, event| match event.id().as_ref() {
            "quit" => {
                app.exit(0);
            }
            "about" => {
                use tauri_plugin_dialog::DialogExt;
                app.dialog()
                    .message(format!(
                        "Book Finder v{}\n\nSearch Open Library by title.",
                        env!("CARGO_PKG_VERSION")
                    ))
                    .title("About Book Finder")
                    .blocking_show();
            }
            _ => {}
        })
        .invoke_handler(tauri::generate_handler![
            get_version,
            search_books,
            book_detail,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
