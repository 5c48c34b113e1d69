mod record;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Record)] derive macro
// ============================================================================

/// Derive macro for the `Record` trait.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "roles")]
/// struct Role {
///     #[record(id)]
///     pub id: String,
///     pub name: String,
///     #[record(rename = "headCount")]
///     pub head_count: u32,
///     #[record(skip)]
///     pub tags: Vec<String>,
/// }
/// ```
///
/// - `#[record(collection = "...")]` sets the collection name.
///   If omitted, defaults to snake_case struct name + "s".
/// - `#[record(id)]` marks the field used as the unique identifier.
///   If omitted, defaults to a field named `id`.
/// - `#[record(rename = "...")]` publishes the field under another name.
/// - `#[record(skip)]` keeps a field out of the descriptor table.
///
/// `String`/`&str` fields are published as text, integer fields as
/// integers and `bool` fields as booleans. Any other field type must be
/// skipped.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
