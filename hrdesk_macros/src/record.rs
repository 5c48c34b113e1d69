use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Ident, LitStr, Type};

enum Kind {
    Text,
    Integer,
    Boolean,
}

struct PublishedField {
    ident: Ident,
    name: String,
    kind: Kind,
}

#[derive(Default)]
struct FieldAttrs {
    id: bool,
    skip: bool,
    rename: Option<String>,
}

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let collection = extract_collection(input)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record derive: only structs with named fields are supported",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record derive: only structs are supported",
            ))
        }
    };

    let mut id_field = None;
    let mut published = Vec::new();

    for field in fields {
        let attrs = field_attrs(field)?;
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "Record derive: unnamed field"))?;

        if attrs.id {
            id_field = Some(ident.clone());
        }
        if attrs.skip {
            continue;
        }

        let kind = classify(&field.ty).ok_or_else(|| {
            syn::Error::new_spanned(
                &field.ty,
                "Record derive: unsupported field type, mark it #[record(skip)]",
            )
        })?;

        published.push(PublishedField {
            name: attrs.rename.unwrap_or_else(|| ident.to_string()),
            ident,
            kind,
        });
    }

    // Default: look for a field named "id"
    let id_field = match id_field {
        Some(ident) => ident,
        None => fields
            .iter()
            .filter_map(|f| f.ident.clone())
            .find(|ident| ident == "id")
            .ok_or_else(|| {
                syn::Error::new(
                    Span::call_site(),
                    "Record derive: no field marked with #[record(id)] and no field named `id`",
                )
            })?,
    };

    let descriptors = published.iter().map(|f| {
        let field_name = &f.name;
        let kind = match f.kind {
            Kind::Text => quote!(::hrdesk::FieldKind::Text),
            Kind::Integer => quote!(::hrdesk::FieldKind::Integer),
            Kind::Boolean => quote!(::hrdesk::FieldKind::Boolean),
        };
        quote! { ::hrdesk::FieldDescriptor::new(#field_name, #kind) }
    });

    let arms = published.iter().map(|f| {
        let field_name = &f.name;
        let ident = &f.ident;
        let value = match f.kind {
            Kind::Text => quote! {
                ::hrdesk::FieldValue::Text(::core::convert::AsRef::<str>::as_ref(&self.#ident))
            },
            // i128 holds every supported integer type losslessly.
            Kind::Integer => quote! { ::hrdesk::FieldValue::Integer(self.#ident as i128) },
            Kind::Boolean => quote! { ::hrdesk::FieldValue::Boolean(self.#ident) },
        };
        quote! { #field_name => ::core::option::Option::Some(#value), }
    });

    Ok(quote! {
        impl ::hrdesk::Record for #name {
            const COLLECTION: &'static str = #collection;

            const FIELDS: &'static [::hrdesk::FieldDescriptor] = &[#(#descriptors),*];

            fn id(&self) -> &str {
                &self.#id_field
            }

            fn field(&self, name: &str) -> ::core::option::Option<::hrdesk::FieldValue<'_>> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

fn extract_collection(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        let mut collection = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                let value: LitStr = meta.value()?.parse()?;
                collection = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unknown record attribute"))
            }
        })?;

        if let Some(c) = collection {
            return Ok(c);
        }
    }

    // Default: snake_case struct name + "s"
    let name = input.ident.to_string();
    Ok(format!("{}s", to_snake_case(&name)))
}

fn field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();
    for attr in &field.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                attrs.id = true;
            } else if meta.path.is_ident("skip") {
                attrs.skip = true;
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                attrs.rename = Some(value.value());
            } else {
                return Err(meta.error("unknown record field attribute"));
            }
            Ok(())
        })?;
    }
    Ok(attrs)
}

fn classify(ty: &Type) -> Option<Kind> {
    match ty {
        Type::Path(path) => {
            let segment = path.path.segments.last()?;
            match segment.ident.to_string().as_str() {
                "String" => Some(Kind::Text),
                "bool" => Some(Kind::Boolean),
                "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64"
                | "usize" => Some(Kind::Integer),
                _ => None,
            }
        }
        Type::Reference(reference) => match &*reference.elem {
            Type::Path(path) if path.path.is_ident("str") => Some(Kind::Text),
            _ => None,
        },
        _ => None,
    }
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
