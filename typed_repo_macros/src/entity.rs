use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Ident};

pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = named_fields(input)?;
    let id_field = extract_id_field(input, fields)?;
    let quantity_field = extract_marked_field(fields, "quantity")?;

    let identity_impl = quote! {
        impl #impl_generics typed_repo::HasIdentity for #name #ty_generics #where_clause {
            fn id(&self) -> typed_repo::Identity {
                ::core::convert::Into::into(self.#id_field)
            }
        }
    };

    let stocked_impl = quantity_field.map(|quantity| {
        quote! {
            impl #impl_generics typed_repo::Stocked for #name #ty_generics #where_clause {
                fn quantity(&self) -> typed_repo::Quantity {
                    self.#quantity
                }

                fn set_quantity(&mut self, quantity: typed_repo::Quantity) {
                    self.#quantity = quantity;
                }
            }
        }
    });

    Ok(quote! {
        #identity_impl
        #stocked_impl
    })
}

fn named_fields(
    input: &DeriveInput,
) -> syn::Result<&syn::punctuated::Punctuated<Field, syn::Token![,]>> {
    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                &input.ident,
                "Entity derive only supports structs with named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "Entity derive only supports structs",
        )),
    }
}

fn extract_id_field(
    input: &DeriveInput,
    fields: &syn::punctuated::Punctuated<Field, syn::Token![,]>,
) -> syn::Result<Ident> {
    if let Some(marked) = extract_marked_field(fields, "id")? {
        return Ok(marked);
    }

    // Default: look for a field named "id"
    for field in fields {
        if let Some(ident) = &field.ident {
            if ident == "id" {
                return Ok(ident.clone());
            }
        }
    }

    Err(syn::Error::new_spanned(
        &input.ident,
        "Entity derive: no field marked with #[entity(id)] and no field named `id`",
    ))
}

/// Finds the single field carrying `#[entity(<marker>)]`.
fn extract_marked_field(
    fields: &syn::punctuated::Punctuated<Field, syn::Token![,]>,
    marker: &str,
) -> syn::Result<Option<Ident>> {
    let mut found: Option<Ident> = None;

    for field in fields {
        for attr in &field.attrs {
            if !attr.path().is_ident("entity") {
                continue;
            }

            let mut is_marked = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") || meta.path.is_ident("quantity") {
                    if meta.path.is_ident(marker) {
                        is_marked = true;
                    }
                    Ok(())
                } else {
                    Err(meta.error("expected `id` or `quantity`"))
                }
            })?;

            if is_marked {
                if found.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        format!("only one field may be marked #[entity({})]", marker),
                    ));
                }
                found = field.ident.clone();
            }
        }
    }

    Ok(found)
}
