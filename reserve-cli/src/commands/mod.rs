pub mod root;
pub mod prove;
pub mod verify;
pub mod demo;

use crate::ItemArgs;

/// Positional items followed by any read from `--items-file`, one per line.
///
/// Trailing `\r` is stripped so files written on Windows hash the same. Blank
/// lines are kept: an empty item is still an item.
pub fn load_items(args: &ItemArgs) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut items = args.items.clone();

    if let Some(path) = &args.items_file {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        items.extend(
            contents
                .lines()
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string()),
        );
    }

    Ok(items)
}
