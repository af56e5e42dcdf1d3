// UI layer: provides a simple interactive menu using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.

use crate::api::{ApiClient, Item};
use crate::listing::{Field, ListingForm};
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use rfd::FileDialog;
use std::path::PathBuf;

/// Main interactive menu. Receives an `ApiClient` instance and runs a
/// simple select loop until the user chooses "Exit".
///
/// Note: `Select::interact()` is keyboard-driven: you can use arrow keys
/// and Enter to choose an option.
pub fn main_menu(api: ApiClient) -> Result<()> {
    loop {
        let items = vec![
            "List an item",
            "Browse items",
            "Search items",
            "Fetch item image",
            "Exit",
        ];
        // `Select` shows a keyboard-navigable list in the terminal.
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => {
                handle_listing(&api)?;
            }
            1 => {
                handle_browse(&api)?;
            }
            2 => {
                handle_search(&api)?;
            }
            3 => {
                handle_fetch_image(&api)?;
            }
            4 => break,
            _ => {}
        }
    }
    Ok(())
}

/// Collect the listing fields, then submit them through a fresh
/// `ListingForm`. A new form per attempt means nothing leaks into the
/// next listing.
fn handle_listing(api: &ApiClient) -> Result<()> {
    // `Input::interact_text()` prompts the user for input and returns it.
    // Name is the one field the prompt refuses to leave empty.
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let category: String = Input::new()
        .with_prompt("Category")
        .allow_empty(true)
        .interact_text()?;
    let image = pick_image()?;

    // On success, re-fetch the listings so the user sees the new total,
    // the same refresh the web frontend does after a completed listing.
    let refresh = api.clone();
    let mut form = ListingForm::new().on_listing_completed(move || {
        if let Ok(items) = refresh.get_items() {
            println!("Item listed. {} item(s) on the market now.", items.len());
        } else {
            println!("Item listed.");
        }
    });
    form.set_field(Field::Name(name));
    form.set_field(Field::Category(category));
    form.set_field(Field::Image(image));

    if !Confirm::new()
        .with_prompt("List this item")
        .default(true)
        .interact()?
    {
        return Ok(());
    }

    // indicatif's spinner shows that the upload is happening.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Listing...");
    form.submit(api);
    spinner.finish_and_clear();
    Ok(())
}

/// Choose the image file for a listing: a native file dialog, a typed
/// path, or no image at all.
fn pick_image() -> Result<Option<PathBuf>> {
    let choices = vec!["Pick image with file dialog", "Type image path", "No image"];
    let selection = Select::new().items(&choices).default(0).interact()?;
    match selection {
        0 => {
            let mut dialog =
                FileDialog::new().add_filter("images", &["png", "jpg", "jpeg", "gif", "webp"]);
            if let Some(dir) = dirs::picture_dir() {
                dialog = dialog.set_directory(&dir);
            }
            // Dismissing the dialog leaves the field unset.
            Ok(dialog.pick_file())
        }
        1 => {
            let path: String = Input::new().with_prompt("Image file path").interact_text()?;
            Ok(Some(PathBuf::from(path)))
        }
        _ => Ok(None),
    }
}

fn handle_browse(api: &ApiClient) -> Result<()> {
    match api.get_items() {
        Ok(items) => print_items(&items),
        Err(e) => println!("Fetching items failed: {}", e),
    }
    Ok(())
}

fn handle_search(api: &ApiClient) -> Result<()> {
    let keyword: String = Input::new().with_prompt("Keyword").interact_text()?;
    match api.search(&keyword) {
        Ok(items) => print_items(&items),
        Err(e) => println!("Search failed: {}", e),
    }
    Ok(())
}

/// Download one stored image and save it to the user's download folder
/// (current directory when none is configured).
fn handle_fetch_image(api: &ApiClient) -> Result<()> {
    let filename: String = Input::new().with_prompt("Image filename").interact_text()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Downloading...");
    let result = api.fetch_image(&filename);
    spinner.finish_and_clear();

    match result {
        Ok(bytes) => {
            let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
            let target = dir.join(&filename);
            std::fs::write(&target, bytes)?;
            println!("Saved to {}", target.display());
        }
        Err(e) => println!("Fetching image failed: {}", e),
    }
    Ok(())
}

fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("No items listed yet.");
        return;
    }
    for item in items {
        let category = if item.category.is_empty() {
            "uncategorized"
        } else {
            item.category.as_str()
        };
        println!("  {} [{}] {}", item.name, category, item.image_filename);
    }
}
