use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token, Type, TypePath
};

struct LinkedAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for LinkedAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(LinkedAttribute { crate_path: path })
    }
}

fn is_entry_field(field: &Field) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident("entry"))
}

/// Derive macro for types that embed a `ListEntry`.
///
/// The entry field is the one tagged `#[entry]`, or else the field named
/// `entry`. A field named `data` additionally gets a `NodeWithData` impl.
#[proc_macro_derive(Linked, attributes(linked, entry))]
pub fn linked_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::sundry };

    for attr in &input.attrs {
        if attr.path().is_ident("linked") {
            match attr.parse_args::<LinkedAttribute>() {
                Ok(linked_attr) => {
                    let path = linked_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let intrusive_path = quote! { #crate_path::linked_list::intrusive };

    let fields = if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        fields
    } else {
        return syn::Error::new_spanned(
            &input,
            "Linked derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let tagged: Vec<&Field> = fields.named.iter().filter(|f| is_entry_field(f)).collect();
    if tagged.len() > 1 {
        return syn::Error::new_spanned(tagged[1], "Only one field may be tagged `#[entry]`")
            .to_compile_error()
            .into();
    }

    let entry_field = tagged.first().copied().or_else(|| {
        fields
            .named
            .iter()
            .find(|f| f.ident.as_ref().is_some_and(|ident| ident == "entry"))
    });

    let entry_field = match entry_field {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(
                struct_name,
                "Struct must have a field named 'entry' or a field tagged `#[entry]`",
            )
            .to_compile_error()
            .into();
        }
    };
    let entry_type = &entry_field.ty;

    let type_ident = if let Type::Path(TypePath { path, .. }) = entry_type {
        match path.segments.last() {
            Some(segment) => segment.ident.clone(),
            None => {
                return syn::Error::new_spanned(entry_type, "Expected a non-empty type path")
                    .to_compile_error()
                    .into();
            }
        }
    } else {
        return syn::Error::new_spanned(entry_type, "Entry field must be a `ListEntry`")
            .to_compile_error()
            .into();
    };

    if type_ident != "ListEntry" {
        return syn::Error::new_spanned(type_ident, "Entry field must be a `ListEntry`")
            .to_compile_error()
            .into();
    }

    let entry_ident = &entry_field.ident;

    let linked_impl = quote! {
        unsafe impl #impl_generics #intrusive_path::traits::Linked for #struct_name #ty_generics #where_clause {
            #[inline]
            unsafe fn entry(
                ptr: ::core::ptr::NonNull<Self>,
            ) -> ::core::ptr::NonNull<#intrusive_path::entry::ListEntry> {
                unsafe {
                    ::core::ptr::NonNull::new_unchecked(
                        ::core::ptr::addr_of_mut!((*ptr.as_ptr()).#entry_ident),
                    )
                }
            }

            #[inline]
            unsafe fn from_entry(
                entry: ::core::ptr::NonNull<#intrusive_path::entry::ListEntry>,
            ) -> ::core::ptr::NonNull<Self> {
                let offset = ::core::mem::offset_of!(Self, #entry_ident);
                unsafe {
                    ::core::ptr::NonNull::new_unchecked(
                        entry.as_ptr().cast::<u8>().sub(offset).cast::<Self>(),
                    )
                }
            }
        }
    };

    // Generate `NodeWithData` trait implementation if `data` field exists
    let data_field = fields
        .named
        .iter()
        .find(|f| f.ident.as_ref().is_some_and(|ident| ident == "data"));

    let data_impl = if let Some(data_field) = data_field {
        let data_type = &data_field.ty;
        quote! {
            impl #impl_generics #intrusive_path::traits::NodeWithData for #struct_name #ty_generics #where_clause {
                type Data = #data_type;

                #[inline]
                fn data(&self) -> &Self::Data {
                    &self.data
                }

                #[inline]
                fn data_mut(&mut self) -> &mut Self::Data {
                    &mut self.data
                }
            }
        }
    } else {
        quote! {}
    };

    let expanded = quote! {
        #linked_impl
        #data_impl
    };

    TokenStream::from(expanded)
}
