mod entity;

use proc_macro::TokenStream;

/// Derive macro implementing `HasIdentity` (and optionally `Stocked`) for a struct.
///
/// The identity field is the one marked `#[entity(id)]`, or a field named `id`
/// when no field is marked. Its type must convert into `typed_repo::Identity`
/// with `Into` and be `Copy`.
///
/// Marking a field `#[entity(quantity)]` additionally implements `Stocked`
/// over that field, which must be of type `typed_repo::Quantity`.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Entity)]
/// struct GroceryItem {
///     id: i64,
///     name: String,
///     #[entity(quantity)]
///     quantity: i64,
/// }
/// ```
///
/// With a custom identity field:
/// ```ignore
/// #[derive(Clone, Entity)]
/// struct Patient {
///     #[entity(id)]
///     patient_no: i64,
///     name: String,
/// }
/// ```
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive_entity(input)
}
