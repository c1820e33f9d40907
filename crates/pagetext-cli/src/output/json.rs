use pagetext_core::error::PagetextError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), PagetextError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
