use syn::{parse_quote, Data, DeriveInput, Error, Lit, Meta, NestedMeta, Path};
use proc_macro2::TokenStream as TokenStream2;
use proc_macro::TokenStream;
use quote::quote;

#[derive(Default)]
struct Capabilities {
    pre_init: bool,
    init: bool,
    run: bool,
    world: Option<Path>,
}

pub fn impl_system(ast: &DeriveInput) -> TokenStream {
    match expand(ast) {
        Ok(gen) => gen.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(ast: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &ast.ident;
    let caps = parse_capabilities(ast)?;
    let inject_fields = inject_fields(ast)?;

    if !caps.pre_init && !caps.init && !caps.run {
        return Err(Error::new_spanned(
            name,
            "a system needs at least one of `pre_init`, `init` or `run` in #[system(...)]",
        ));
    }

    let mut generics = ast.generics.clone();
    let world = match &caps.world {
        Some(path) => quote!(#path),
        None => {
            if let Some((_, attr_span)) = inject_fields.first() {
                return Err(Error::new(
                    *attr_span,
                    "#[inject] requires a concrete world: #[system(world = \"path::To::World\")]",
                ));
            }
            generics.params.push(parse_quote!(__W: phase_pipeline::world::World));
            quote!(__W)
        },
    };
    let (impl_generics, _, _) = generics.split_for_impl();
    let (_, ty_generics, where_clause) = ast.generics.split_for_impl();

    let inject = if inject_fields.is_empty() {
        quote!()
    } else {
        let fields = inject_fields.iter().map(|(field, _)| field);
        quote! {
            fn inject(&mut self, world: &phase_pipeline::world::WorldHandle<#world>) {
                #(self.#fields = ::core::option::Option::Some(world.clone());)*
            }
        }
    };

    let pre_init = caps.pre_init.then(|| quote! {
        #[inline(always)]
        fn as_pre_init(&mut self) -> ::core::option::Option<&mut dyn phase_pipeline::systems::PreInitSystem> {
            ::core::option::Option::Some(self)
        }
    });
    let init = caps.init.then(|| quote! {
        #[inline(always)]
        fn as_init(&mut self) -> ::core::option::Option<&mut dyn phase_pipeline::systems::InitSystem> {
            ::core::option::Option::Some(self)
        }
    });
    let run = caps.run.then(|| quote! {
        #[inline(always)]
        fn as_run(&mut self) -> ::core::option::Option<&mut dyn phase_pipeline::systems::RunSystem> {
            ::core::option::Option::Some(self)
        }
    });

    Ok(quote! {
        impl #impl_generics phase_pipeline::systems::System<#world> for #name #ty_generics #where_clause {
            #inject
            #pre_init
            #init
            #run
        }
    })
}

fn parse_capabilities(ast: &DeriveInput) -> syn::Result<Capabilities> {
    let mut caps = Capabilities::default();
    for attr in ast.attrs.iter().filter(|a| a.path.is_ident("system")) {
        let list = match attr.parse_meta()? {
            Meta::List(list) => list,
            other => return Err(Error::new_spanned(other, "expected #[system(...)]")),
        };

        for nested in list.nested {
            match nested {
                NestedMeta::Meta(Meta::Path(path)) if path.is_ident("pre_init") => caps.pre_init = true,
                NestedMeta::Meta(Meta::Path(path)) if path.is_ident("init") => caps.init = true,
                NestedMeta::Meta(Meta::Path(path)) if path.is_ident("run") => caps.run = true,
                NestedMeta::Meta(Meta::NameValue(pair)) if pair.path.is_ident("world") => match pair.lit {
                    Lit::Str(path) => caps.world = Some(path.parse()?),
                    other => return Err(Error::new_spanned(other, "expected a string literal path")),
                },
                other => {
                    return Err(Error::new_spanned(
                        other,
                        "expected one of `pre_init`, `init`, `run` or `world = \"...\"`",
                    ))
                },
            }
        }
    }
    Ok(caps)
}

fn inject_fields(ast: &DeriveInput) -> syn::Result<Vec<(TokenStream2, proc_macro2::Span)>> {
    let mut fields = Vec::new();
    let data = match &ast.data {
        Data::Struct(data) => data,
        _ => return Ok(fields),
    };

    for (index, field) in data.fields.iter().enumerate() {
        let attr = match field.attrs.iter().find(|a| a.path.is_ident("inject")) {
            Some(attr) => attr,
            None => continue,
        };
        if !attr.tokens.is_empty() {
            return Err(Error::new_spanned(attr, "#[inject] takes no arguments"));
        }

        let member = match &field.ident {
            Some(ident) => quote!(#ident),
            None => {
                let index = syn::Index::from(index);
                quote!(#index)
            },
        };
        fields.push((member, syn::spanned::Spanned::span(attr)));
    }
    Ok(fields)
}
