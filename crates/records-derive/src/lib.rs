//! `#[derive(Entry)]` for the records tabular mapper.
//!
//! The derive turns a struct with named fields into an entry type: it emits
//! the static `EntryDescriptor` (fields in declaration order, their column
//! annotations and kinds) and the positional `Record` accessors the row codec
//! drives.
//!
//! # Attributes
//!
//! - `#[csv("column")]` maps the field to the named column. Fields without
//!   it are excluded from the tabular form.
//! - `#[csv("column", readonly)]` maps the field for encoding only; decoding
//!   leaves it at its zero value.
//!
//! Field kinds come from the field type's last path segment: the primitive
//! integers and floats, `bool` and `String` have a text coercion, every other
//! type is `Unsupported`. Type aliases are not resolved, and neither are
//! generic parameters: a field of type `T` is `Unsupported` whatever `T` is
//! instantiated with.
//!
//! The generated code refers to the `records` crate by absolute path, so it
//! must be reachable under that name.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use records_types::{FieldKind, FloatWidth, IntWidth};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{
    parse_macro_input, spanned::Spanned, Attribute, Data, DeriveInput, Error, Fields, Ident,
    LitStr, Token, Type,
};

/// Derive `records::Entry` and `records::Record` for a struct.
///
/// ```ignore
/// #[derive(Debug, Default, records::Entry)]
/// struct Person {
///     age: i32,
///     #[csv("name")]
///     name: String,
///     #[csv("isEmployee")]
///     is_employee: bool,
/// }
/// ```
#[proc_macro_derive(Entry, attributes(csv))]
pub fn derive_entry(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_entry(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Parsed `#[csv(...)]` arguments.
struct CsvAttr {
    column: LitStr,
    readonly: bool,
}

impl Parse for CsvAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let column: LitStr = input.parse()?;
        let mut readonly = false;

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let option: Ident = input.parse()?;
            if option == "readonly" {
                readonly = true;
            } else {
                return Err(Error::new(
                    option.span(),
                    "unknown csv option, expected `readonly`",
                ));
            }
        }

        if !input.is_empty() {
            return Err(input.error("expected `,` after the column name"));
        }

        Ok(Self { column, readonly })
    }
}

/// One struct field as the derive sees it.
struct FieldInfo {
    ident: Ident,
    ty: Type,
    kind: FieldKind,
    csv: Option<CsvAttr>,
}

fn expand_entry(input: DeriveInput) -> Result<TokenStream2, Error> {
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(Error::new(
                    input.ident.span(),
                    "#[derive(Entry)] requires a struct with named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(Error::new(
                input.ident.span(),
                "#[derive(Entry)] only supports structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "expected a named field"))?;
        fields.push(FieldInfo {
            ident,
            ty: field.ty.clone(),
            kind: classify(&field.ty),
            csv: csv_attr(&field.attrs)?,
        });
    }

    let name = &input.ident;
    let type_name = name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let descriptors = fields.iter().map(field_descriptor);

    let get_arms = fields
        .iter()
        .enumerate()
        .filter(|(_, info)| info.kind.is_supported())
        .map(|(index, info)| {
            let ident = &info.ident;
            quote! {
                #index => ::records::FieldValue::from(::core::clone::Clone::clone(&self.#ident)),
            }
        });

    let set_arms = fields
        .iter()
        .enumerate()
        .filter(|(_, info)| info.kind.is_supported())
        .map(|(index, info)| {
            let ident = &info.ident;
            let ty = &info.ty;
            quote! {
                #index => {
                    self.#ident = <#ty as ::records::FromFieldValue>::from_field_value(value)?;
                    ::core::result::Result::Ok(())
                }
            }
        });

    Ok(quote! {
        impl #impl_generics ::records::Record for #name #ty_generics #where_clause {
            fn field_value(&self, index: usize) -> ::records::FieldValue {
                match index {
                    #(#get_arms)*
                    _ => ::records::FieldValue::Unsupported,
                }
            }

            #[allow(unused_variables)]
            fn set_field_value(
                &mut self,
                index: usize,
                value: ::records::FieldValue,
            ) -> ::core::result::Result<(), ::records::ValueError> {
                match index {
                    #(#set_arms)*
                    _ => ::core::result::Result::Err(::records::ValueError::NoSuchField(index)),
                }
            }
        }

        impl #impl_generics ::records::Entry for #name #ty_generics #where_clause {
            fn descriptor() -> &'static ::records::EntryDescriptor {
                static DESCRIPTOR: ::std::sync::OnceLock<::records::EntryDescriptor> =
                    ::std::sync::OnceLock::new();
                DESCRIPTOR.get_or_init(|| {
                    ::records::EntryDescriptor::new(#type_name, ::std::vec![#(#descriptors),*])
                })
            }
        }
    })
}

fn csv_attr(attrs: &[Attribute]) -> Result<Option<CsvAttr>, Error> {
    let mut found: Option<CsvAttr> = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("csv")) {
        if found.is_some() {
            return Err(Error::new(attr.span(), "duplicate #[csv] attribute"));
        }
        found = Some(attr.parse_args::<CsvAttr>()?);
    }
    Ok(found)
}

fn classify(ty: &Type) -> FieldKind {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            match type_path.path.segments.last() {
                Some(segment) if segment.arguments.is_none() => {
                    FieldKind::from_type_name(&segment.ident.to_string())
                }
                _ => FieldKind::Unsupported,
            }
        }
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),
        _ => FieldKind::Unsupported,
    }
}

fn field_descriptor(info: &FieldInfo) -> TokenStream2 {
    let name = info.ident.unraw().to_string();
    let kind = kind_tokens(info.kind);
    let (column, writable) = match &info.csv {
        Some(csv) => {
            let column = &csv.column;
            (
                quote!(::core::option::Option::Some(::std::string::String::from(#column))),
                !csv.readonly,
            )
        }
        None => (quote!(::core::option::Option::None), true),
    };

    quote! {
        ::records::FieldDescriptor {
            name: ::std::string::String::from(#name),
            column: #column,
            kind: #kind,
            writable: #writable,
        }
    }
}

fn kind_tokens(kind: FieldKind) -> TokenStream2 {
    match kind {
        FieldKind::Int(width) => {
            let width = width_tokens(width);
            quote!(::records::FieldKind::Int(#width))
        }
        FieldKind::Uint(width) => {
            let width = width_tokens(width);
            quote!(::records::FieldKind::Uint(#width))
        }
        FieldKind::Float(FloatWidth::W32) => {
            quote!(::records::FieldKind::Float(::records::FloatWidth::W32))
        }
        FieldKind::Float(FloatWidth::W64) => {
            quote!(::records::FieldKind::Float(::records::FloatWidth::W64))
        }
        FieldKind::Bool => quote!(::records::FieldKind::Bool),
        FieldKind::Text => quote!(::records::FieldKind::Text),
        FieldKind::Unsupported => quote!(::records::FieldKind::Unsupported),
    }
}

fn width_tokens(width: IntWidth) -> TokenStream2 {
    match width {
        IntWidth::W8 => quote!(::records::IntWidth::W8),
        IntWidth::W16 => quote!(::records::IntWidth::W16),
        IntWidth::W32 => quote!(::records::IntWidth::W32),
        IntWidth::W64 => quote!(::records::IntWidth::W64),
        IntWidth::W128 => quote!(::records::IntWidth::W128),
        IntWidth::Size => quote!(::records::IntWidth::Size),
    }
}
