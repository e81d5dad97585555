use std::collections::HashMap;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, Result, Token, Type,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

pub(crate) fn expand_record_sink(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`RecordSink` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`RecordSink` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut routes: HashMap<String, &Ident> = HashMap::new();

    for field in &fields {
        for kind in &field.kinds {
            let existing = routes.insert(kind.to_string(), &field.name);

            if !existing.is_none() {
                Err(Error::new_spanned(kind, "Record kinds must be unique."))?
            }
        }
    }

    let cases = fields.iter().map(|field| {
        let FieldMetadata {
            name,
            kinds,
            is_vec,
        } = field;

        let assignment = if *is_vec {
            quote! { self.#name.push(record); }
        } else {
            quote! { self.#name = Some(record); }
        };

        quote! { #(RecordKind::#kinds)|* => { #assignment } }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl RecordSink for #name {
            fn add_record(&mut self, record: StructuralRecord) {
                match record.kind {
                    #(#cases)*
                    _ => {}
                }
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    kinds: Vec<Ident>,
    is_vec: bool,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let Some(name) = field.ident.clone() else {
            return Ok(None);
        };

        let Some(attr) = field
            .attrs
            .iter()
            .find(|a| a.path().is_ident("records"))
        else {
            return Ok(None);
        };

        let RecordsAttribute { kinds } = attr.meta.require_list()?.parse_args()?;

        if kinds.is_empty() {
            Err(Error::new_spanned(
                attr,
                "At least one record kind is required.",
            ))?;
        }

        let Type::Path(path) = &field.ty else {
            Err(Error::new_spanned(
                &field.ty,
                "Field must have a type annotation.",
            ))?
        };

        let Some(segment) = path.path.segments.first() else {
            Err(Error::new_spanned(
                &path.path.segments,
                "Field must have an `Option<StructuralRecord>` or `Vec<StructuralRecord>` type.",
            ))?
        };

        let is_vec = if segment.ident == "Option" {
            false
        } else if segment.ident == "Vec" {
            true
        } else {
            Err(Error::new_spanned(
                &segment.ident,
                "Field must have an `Option<StructuralRecord>` or `Vec<StructuralRecord>` type.",
            ))?
        };

        Ok(Some(Self {
            name,
            kinds,
            is_vec,
        }))
    }
}

#[derive(Debug)]
struct RecordsAttribute {
    kinds: Vec<Ident>,
}

impl Parse for RecordsAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let kinds = Punctuated::<Ident, Token![,]>::parse_terminated(input)?;
        Ok(Self {
            kinds: kinds.into_iter().collect(),
        })
    }
}
