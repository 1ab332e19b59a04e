use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, Data, DeriveInput, Field, Fields, GenericArgument, LitInt, LitStr,
    PathArguments, Type, TypePath,
};

/// Derives `ews_schema::cores::ComplexType` for a struct describing one XSD complex type.
///
/// The struct carries `#[ews(type_name = "...", namespace = "messages" | "types", root = "...")]`,
/// `root` being the name of the global element when the type has one. Every field carries one of:
///
/// - `#[ews(base)]`: the embedded base type, written before the derived fields;
/// - `#[ews(required)]` / `#[ews(optional)]`: an `Option<T>` child element;
/// - `#[ews(repeated, min = N)]`: a `Vec<T>` of consecutive child elements;
/// - `#[ews(attribute, required | optional)]`: an `Option<T>` unqualified attribute.
///
/// Element names default to the PascalCase form of the field name and can be
/// overridden with `rename = "..."`. Elements live in the namespace of the
/// enclosing type unless `namespace = "..."` says otherwise.
///
/// Besides the trait impl, the macro emits the `XmlValue` glue and an
/// accessor/mutator pair per field.
#[proc_macro_derive(ComplexType, attributes(ews))]
pub fn derive_complex_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    impl_complex_type(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct TypeAttributes {
    type_name: LitStr,
    namespace: Ident,
    root: Option<LitStr>,
}

#[derive(Clone, Copy)]
enum Occurs {
    Required,
    Optional,
    Repeated(usize),
}

enum FieldKind {
    Base,
    Attribute(Occurs),
    Element { occurs: Occurs, namespace: Ident },
}

struct FieldEntry {
    ident: Ident,
    /// `T` in `Option<T>` / `Vec<T>`, or the base type itself.
    value_type: Type,
    xml_name: String,
    kind: FieldKind,
}

fn impl_complex_type(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ComplexType cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "ComplexType can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "ComplexType can only be derived for structs",
            ))
        }
    };

    let type_attributes = parse_type_attributes(input)?;
    let entries = fields
        .into_iter()
        .map(|field| parse_field(field, &type_attributes.namespace))
        .collect::<syn::Result<Vec<_>>>()?;

    if entries
        .iter()
        .filter(|entry| matches!(entry.kind, FieldKind::Base))
        .count()
        > 1
    {
        return Err(syn::Error::new_spanned(
            name,
            "a complex type extends at most one base type",
        ));
    }

    let mapping = generate_mapping(&type_attributes, &entries);
    let writers = generate_writers(&entries);
    let reader = generate_reader(&entries);
    let accessors = generate_accessors(&entries);

    Ok(quote! {
        impl ::ews_schema::cores::ComplexType for #name {
            #mapping
            #writers
            #reader
        }

        impl ::ews_schema::cores::XmlValue for #name {
            fn write_content<'a>(
                &'a self,
                element: ::ews_schema::xml::builder::Element<'a>,
            ) -> Result<::ews_schema::xml::builder::Element<'a>, ::ews_schema::EwsError> {
                ::ews_schema::cores::ser::write_complex(self, element)
            }

            fn read_content(
                node: ::ews_schema::xml::parser::Node<'_, '_>,
                config: &::ews_schema::config::ReaderConfig,
            ) -> Result<Self, ::ews_schema::EwsError> {
                ::ews_schema::cores::de::read_complex(node, config)
            }
        }

        impl #name {
            #(#accessors)*
        }
    })
}

fn parse_type_attributes(input: &DeriveInput) -> syn::Result<TypeAttributes> {
    let mut type_name = None;
    let mut namespace = None;
    let mut root = None;

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("ews")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("type_name") {
                type_name = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.path.is_ident("namespace") {
                namespace = Some(namespace_variant(&meta.value()?.parse::<LitStr>()?)?);
            } else if meta.path.is_ident("root") {
                root = Some(meta.value()?.parse::<LitStr>()?);
            } else {
                return Err(meta.error("expected `type_name`, `namespace` or `root`"));
            }
            Ok(())
        })?;
    }

    let type_name = type_name.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "missing #[ews(type_name = \"...\")]")
    })?;
    let namespace = namespace.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "missing #[ews(namespace = \"...\")]")
    })?;

    Ok(TypeAttributes {
        type_name,
        namespace,
        root,
    })
}

fn namespace_variant(lit: &LitStr) -> syn::Result<Ident> {
    let variant = match lit.value().as_str() {
        "messages" => "Messages",
        "types" => "Types",
        "soap" => "Soap",
        other => {
            return Err(syn::Error::new(
                lit.span(),
                format!("unknown namespace `{other}`, expected `messages`, `types` or `soap`"),
            ))
        }
    };
    Ok(Ident::new(variant, lit.span()))
}

fn parse_field(field: &Field, type_namespace: &Ident) -> syn::Result<FieldEntry> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

    let mut base = false;
    let mut attribute = false;
    let mut occurs = None;
    let mut min = None;
    let mut rename = None;
    let mut namespace = None;

    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("ews")) {
        attr.parse_nested_meta(|meta| {
            let set_occurs = |occurs: &mut Option<Occurs>, value| {
                if occurs.replace(value).is_some() {
                    return Err(meta.error("cardinality given more than once"));
                }
                Ok(())
            };

            if meta.path.is_ident("base") {
                base = true;
            } else if meta.path.is_ident("attribute") {
                attribute = true;
            } else if meta.path.is_ident("required") {
                set_occurs(&mut occurs, Occurs::Required)?;
            } else if meta.path.is_ident("optional") {
                set_occurs(&mut occurs, Occurs::Optional)?;
            } else if meta.path.is_ident("repeated") {
                set_occurs(&mut occurs, Occurs::Repeated(0))?;
            } else if meta.path.is_ident("min") {
                min = Some(meta.value()?.parse::<LitInt>()?.base10_parse::<usize>()?);
            } else if meta.path.is_ident("rename") {
                rename = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("namespace") {
                namespace = Some(namespace_variant(&meta.value()?.parse::<LitStr>()?)?);
            } else {
                return Err(meta.error("unsupported ews field attribute"));
            }
            Ok(())
        })?;
    }

    let xml_name = rename.unwrap_or_else(|| pascal_case(&ident.unraw().to_string()));

    if base {
        if attribute || occurs.is_some() || namespace.is_some() {
            return Err(syn::Error::new_spanned(
                &ident,
                "`base` cannot be combined with other ews field attributes",
            ));
        }
        return Ok(FieldEntry {
            ident,
            value_type: field.ty.clone(),
            xml_name,
            kind: FieldKind::Base,
        });
    }

    let occurs = match (occurs, min) {
        (None, _) => {
            return Err(syn::Error::new_spanned(
                &ident,
                "expected one of `required`, `optional` or `repeated`",
            ))
        }
        (Some(Occurs::Repeated(_)), Some(min)) => Occurs::Repeated(min),
        (Some(_), Some(_)) => {
            return Err(syn::Error::new_spanned(
                &ident,
                "`min` only applies to repeated elements",
            ))
        }
        (Some(occurs), None) => occurs,
    };

    let wrapper = if matches!(occurs, Occurs::Repeated(_)) {
        "Vec"
    } else {
        "Option"
    };
    let value_type = wrapped_type(&field.ty, wrapper).cloned().ok_or_else(|| {
        syn::Error::new_spanned(&field.ty, format!("expected `{wrapper}<T>` storage"))
    })?;

    let kind = if attribute {
        if matches!(occurs, Occurs::Repeated(_)) || namespace.is_some() {
            return Err(syn::Error::new_spanned(
                &ident,
                "attributes are single-valued and unqualified",
            ));
        }
        FieldKind::Attribute(occurs)
    } else {
        FieldKind::Element {
            occurs,
            namespace: namespace.unwrap_or_else(|| type_namespace.clone()),
        }
    };

    Ok(FieldEntry {
        ident,
        value_type,
        xml_name,
        kind,
    })
}

fn wrapped_type<'t>(ty: &'t Type, wrapper: &str) -> Option<&'t Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect()
}

fn occurs_tokens(occurs: Occurs) -> TokenStream2 {
    match occurs {
        Occurs::Required => quote! { ::ews_schema::cores::Occurs::Required },
        Occurs::Optional => quote! { ::ews_schema::cores::Occurs::Optional },
        Occurs::Repeated(min) => quote! { ::ews_schema::cores::Occurs::Repeated { min: #min } },
    }
}

fn generate_mapping(type_attributes: &TypeAttributes, entries: &[FieldEntry]) -> TokenStream2 {
    let TypeAttributes {
        type_name,
        namespace,
        root,
    } = type_attributes;

    let root = match root {
        Some(root) => quote! { Some(#root) },
        None => quote! { None },
    };

    let base = entries
        .iter()
        .find(|entry| matches!(entry.kind, FieldKind::Base))
        .map_or_else(
            || quote! { None },
            |entry| {
                let ty = &entry.value_type;
                quote! { Some(<#ty as ::ews_schema::cores::ComplexType>::mapping) }
            },
        );

    let elements = entries.iter().filter_map(|entry| {
        let FieldKind::Element { occurs, namespace } = &entry.kind else {
            return None;
        };
        let field = entry.ident.unraw().to_string();
        let xml_name = &entry.xml_name;
        let occurs = occurs_tokens(*occurs);
        Some(quote! {
            ::ews_schema::cores::ElementMapping {
                field: #field,
                name: #xml_name,
                namespace: ::ews_schema::cores::Namespace::#namespace,
                occurs: #occurs,
            }
        })
    });

    let attributes = entries.iter().filter_map(|entry| {
        let FieldKind::Attribute(occurs) = &entry.kind else {
            return None;
        };
        let field = entry.ident.unraw().to_string();
        let xml_name = &entry.xml_name;
        let occurs = occurs_tokens(*occurs);
        Some(quote! {
            ::ews_schema::cores::AttributeMapping {
                field: #field,
                name: #xml_name,
                occurs: #occurs,
            }
        })
    });

    quote! {
        fn mapping() -> &'static ::ews_schema::cores::TypeMapping {
            static MAPPING: ::ews_schema::cores::TypeMapping = ::ews_schema::cores::TypeMapping {
                type_name: #type_name,
                namespace: ::ews_schema::cores::Namespace::#namespace,
                root: #root,
                base: #base,
                elements: &[#(#elements),*],
                attributes: &[#(#attributes),*],
            };
            &MAPPING
        }
    }
}

fn generate_writers(entries: &[FieldEntry]) -> TokenStream2 {
    let mut attribute_writes = Vec::new();
    let mut element_writes = Vec::new();
    let mut attribute_index = 0usize;
    let mut element_index = 0usize;

    for entry in entries {
        let ident = &entry.ident;
        match &entry.kind {
            FieldKind::Base => {
                attribute_writes.push(quote! {
                    ::ews_schema::cores::ComplexType::write_attributes(&self.#ident, writer)?;
                });
                element_writes.push(quote! {
                    ::ews_schema::cores::ComplexType::write_elements(&self.#ident, writer)?;
                });
            }
            FieldKind::Attribute(_) => {
                let index = attribute_index;
                attribute_index += 1;
                attribute_writes.push(quote! {
                    writer.attribute(&mapping.attributes[#index], self.#ident.as_ref())?;
                });
            }
            FieldKind::Element { occurs, .. } => {
                let index = element_index;
                element_index += 1;
                element_writes.push(match occurs {
                    Occurs::Required => quote! {
                        writer.required(&mapping.elements[#index], self.#ident.as_ref())?;
                    },
                    Occurs::Optional => quote! {
                        writer.optional(&mapping.elements[#index], self.#ident.as_ref())?;
                    },
                    Occurs::Repeated(_) => quote! {
                        writer.repeated(&mapping.elements[#index], &self.#ident)?;
                    },
                });
            }
        }
    }

    let attribute_mapping = (attribute_index > 0).then(|| {
        quote! { let mapping = <Self as ::ews_schema::cores::ComplexType>::mapping(); }
    });
    let element_mapping = (element_index > 0).then(|| {
        quote! { let mapping = <Self as ::ews_schema::cores::ComplexType>::mapping(); }
    });
    let attribute_writer = writer_ident(attribute_writes.is_empty());
    let element_writer = writer_ident(element_writes.is_empty());

    quote! {
        fn write_attributes<'a>(
            &'a self,
            #attribute_writer: &mut ::ews_schema::cores::ser::ElementWriter<'a>,
        ) -> Result<(), ::ews_schema::EwsError> {
            #attribute_mapping
            #(#attribute_writes)*
            Ok(())
        }

        fn write_elements<'a>(
            &'a self,
            #element_writer: &mut ::ews_schema::cores::ser::ElementWriter<'a>,
        ) -> Result<(), ::ews_schema::EwsError> {
            #element_mapping
            #(#element_writes)*
            Ok(())
        }
    }
}

fn writer_ident(unused: bool) -> Ident {
    if unused {
        format_ident!("_writer")
    } else {
        format_ident!("writer")
    }
}

fn generate_reader(entries: &[FieldEntry]) -> TokenStream2 {
    let mut reads = Vec::new();
    let mut attribute_index = 0usize;
    let mut element_index = 0usize;

    // Attributes are read before elements so that the base and the derived
    // type see them through the same node.
    for entry in entries {
        let ident = &entry.ident;
        match &entry.kind {
            FieldKind::Base => {
                let ty = &entry.value_type;
                reads.push(quote! {
                    let #ident = <#ty as ::ews_schema::cores::ComplexType>::read(reader)?;
                });
            }
            FieldKind::Attribute(_) => {
                let index = attribute_index;
                attribute_index += 1;
                reads.push(quote! {
                    let #ident = reader.attribute(&mapping.attributes[#index])?;
                });
            }
            FieldKind::Element { .. } => {}
        }
    }

    for entry in entries {
        let ident = &entry.ident;
        let FieldKind::Element { occurs, .. } = &entry.kind else {
            continue;
        };
        let index = element_index;
        element_index += 1;
        reads.push(match occurs {
            Occurs::Required => quote! {
                let #ident = reader.required(&mapping.elements[#index])?;
            },
            Occurs::Optional => quote! {
                let #ident = reader.optional(&mapping.elements[#index])?;
            },
            Occurs::Repeated(_) => quote! {
                let #ident = reader.repeated(&mapping.elements[#index])?;
            },
        });
    }

    let field_names = entries.iter().map(|entry| &entry.ident);
    let mapping = (attribute_index + element_index > 0).then(|| {
        quote! { let mapping = <Self as ::ews_schema::cores::ComplexType>::mapping(); }
    });
    let reader = if reads.is_empty() {
        format_ident!("_reader")
    } else {
        format_ident!("reader")
    };

    quote! {
        fn read(
            #reader: &mut ::ews_schema::cores::de::ElementReader<'_>,
        ) -> Result<Self, ::ews_schema::EwsError> {
            #mapping
            #(#reads)*
            Ok(Self { #(#field_names),* })
        }
    }
}

fn generate_accessors(entries: &[FieldEntry]) -> Vec<TokenStream2> {
    entries
        .iter()
        .map(|entry| {
            let ident = &entry.ident;
            let ty = &entry.value_type;
            let name = ident.unraw().to_string();
            let setter = format_ident!("set_{}", name);
            let mutable = format_ident!("{}_mut", name);

            match &entry.kind {
                FieldKind::Base => {
                    let doc = format!("The embedded `{}` base value.", quote!(#ty));
                    quote! {
                        #[doc = #doc]
                        pub fn base(&self) -> &#ty {
                            &self.#ident
                        }

                        pub fn base_mut(&mut self) -> &mut #ty {
                            &mut self.#ident
                        }
                    }
                }
                FieldKind::Element {
                    occurs: Occurs::Repeated(_),
                    ..
                } => {
                    let doc = format!("The `{}` elements, in document order.", entry.xml_name);
                    quote! {
                        #[doc = #doc]
                        pub fn #ident(&self) -> &[#ty] {
                            &self.#ident
                        }

                        pub fn #setter(&mut self, value: Vec<#ty>) -> &mut Self {
                            self.#ident = value;
                            self
                        }

                        pub fn #mutable(&mut self) -> &mut Vec<#ty> {
                            &mut self.#ident
                        }
                    }
                }
                FieldKind::Element { .. } | FieldKind::Attribute(_) => {
                    let doc = format!("The `{}` value, `None` when absent.", entry.xml_name);
                    quote! {
                        #[doc = #doc]
                        pub fn #ident(&self) -> Option<&#ty> {
                            self.#ident.as_ref()
                        }

                        pub fn #setter(&mut self, value: impl Into<Option<#ty>>) -> &mut Self {
                            self.#ident = value.into();
                            self
                        }
                    }
                }
            }
        })
        .collect()
}
