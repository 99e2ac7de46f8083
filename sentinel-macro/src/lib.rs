/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
#![forbid(unsafe_code)]

//! Sentinel Macro Library
//!
//! Procedural macros for the Sentinel actor framework: boilerplate derives and
//! compile-time bound checks for message payloads and actor models, plus an
//! async entry point.
//!
//! # Message Macro
//!
//! ```ignore
//! // Payload carried inside an envelope
//! #[sentinel_message]
//! pub struct GeoPoint {
//!     pub lat: f64,
//!     pub lon: f64,
//! }
//!
//! // Payload that also travels over the wire shape
//! #[sentinel_message(wire)]
//! pub struct ZoneSpec {
//!     pub zone_id: i64,
//! }
//! ```
//!
//! # Actor Macro
//!
//! ```ignore
//! #[sentinel_actor]
//! pub struct Camera {
//!     photos_requested: u64,
//! }
//! ```
//!
//! # Main Entry Point
//!
//! ```ignore
//! use sentinel_reactive::prelude::*;
//!
//! #[sentinel_main]
//! async fn main() -> anyhow::Result<()> {
//!     let runtime = SentinelApp::launch::<MyPayload>();
//!     // ... compose and start actors
//!     runtime.shutdown_all().await
//! }
//! ```

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, DeriveInput, ItemFn};

fn has_derive(input: &DeriveInput, trait_name: &str) -> bool {
    input.attrs.iter().any(|attr| {
        if attr.path().is_ident("derive") {
            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(trait_name)
                    || meta.path.segments.last().is_some_and(|s| s.ident == trait_name)
                {
                    found = true;
                }
                Ok(())
            });
            found
        } else {
            false
        }
    })
}

/// Options parsed from `#[sentinel_message(...)]`.
#[derive(Default)]
struct MessageOptions {
    /// Derive serde traits so the type can appear in wire envelopes.
    wire: bool,
}

impl MessageOptions {
    fn parse(attr: &TokenStream) -> Self {
        let mut options = Self::default();
        for part in attr.to_string().split(',') {
            if part.trim() == "wire" {
                options.wire = true;
            }
        }
        options
    }
}

/// Derives the boilerplate a type needs to travel inside a Sentinel envelope.
///
/// Adds `#[derive(Clone, Debug)]` for whichever of the two is missing and a
/// compile-time assertion that the type is `Send + Sync + 'static`. With the
/// `wire` option it also derives `serde::Serialize` and `serde::Deserialize`
/// (the crate using it must depend on `serde`).
///
/// ```ignore
/// #[sentinel_message(wire)]
/// pub struct OrbitParameters {
///     pub altitude: f64,
///     pub raan: f64,
///     pub inclination: f64,
/// }
/// ```
#[proc_macro_attribute]
pub fn sentinel_message(attr: TokenStream, item: TokenStream) -> TokenStream {
    let options = MessageOptions::parse(&attr);
    let input = parse_macro_input!(item as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let derives = {
        let mut traits = Vec::new();
        if !has_derive(&input, "Clone") {
            traits.push(quote!(Clone));
        }
        if !has_derive(&input, "Debug") {
            traits.push(quote!(Debug));
        }
        if options.wire {
            if !has_derive(&input, "Serialize") {
                traits.push(quote!(serde::Serialize));
            }
            if !has_derive(&input, "Deserialize") {
                traits.push(quote!(serde::Deserialize));
            }
        }
        if traits.is_empty() {
            quote!()
        } else {
            quote!(#[derive(#(#traits),*)])
        }
    };

    let assert_ident = quote::format_ident!("_AssertSentinelMessage_{}", name);

    let expanded = quote! {
        #derives
        #input

        #[doc(hidden)]
        #[allow(dead_code, non_camel_case_types, non_snake_case, clippy::needless_lifetimes)]
        const _: () = {
            fn #assert_ident #impl_generics () #where_clause {
                fn assert_bounds<T: Send + Sync + 'static>() {}
                assert_bounds::<#name #ty_generics>();
            }
        };
    };

    TokenStream::from(expanded)
}

/// Derives the boilerplate for a Sentinel actor model.
///
/// Adds `#[derive(Debug)]` when it is missing and asserts at compile time that
/// the model is `Send + 'static`, which the run loop needs to move it onto its
/// own task. Unlike messages, actor models are never cloned.
///
/// ```ignore
/// #[sentinel_actor]
/// pub struct OrbitControl {
///     maneuvers_sent: u64,
/// }
/// ```
#[proc_macro_attribute]
pub fn sentinel_actor(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let derives = if has_derive(&input, "Debug") {
        quote!()
    } else {
        quote!(#[derive(Debug)])
    };

    let assert_ident = quote::format_ident!("_AssertSentinelActor_{}", name);

    let expanded = quote! {
        #derives
        #input

        #[doc(hidden)]
        #[allow(dead_code, non_camel_case_types, non_snake_case, clippy::needless_lifetimes)]
        const _: () = {
            fn #assert_ident #impl_generics () #where_clause {
                fn assert_bounds<T: Send + 'static>() {}
                assert_bounds::<#name #ty_generics>();
            }
        };
    };

    TokenStream::from(expanded)
}

/// Entry point macro for Sentinel applications.
///
/// Builds a Tokio runtime (re-exported through `sentinel_reactive::prelude::tokio`)
/// and blocks on the async body of `main`.
///
/// - `flavor = "current_thread"` selects the single-threaded runtime.
/// - `worker_threads = N` sets the worker count of the multi-threaded runtime.
#[proc_macro_attribute]
pub fn sentinel_main(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let body = &input.block;

    if sig.asyncness.is_none() {
        return syn::Error::new_spanned(
            sig.fn_token,
            "the async keyword is missing from the function declaration",
        )
        .to_compile_error()
        .into();
    }

    if sig.ident != "main" {
        return syn::Error::new_spanned(
            &sig.ident,
            "sentinel_main can only be applied to the main function",
        )
        .to_compile_error()
        .into();
    }

    let attr_string = attr.to_string();
    let use_current_thread = attr_string.contains("current_thread");
    let worker_threads: Option<usize> = attr_string
        .split(',')
        .find(|s| s.contains("worker_threads"))
        .and_then(|s| s.split('=').nth(1).and_then(|v| v.trim().parse().ok()));

    let runtime_builder = if use_current_thread {
        quote! {
            ::sentinel_reactive::prelude::tokio::runtime::Builder::new_current_thread()
        }
    } else if let Some(threads) = worker_threads {
        quote! {
            ::sentinel_reactive::prelude::tokio::runtime::Builder::new_multi_thread()
                .worker_threads(#threads)
        }
    } else {
        quote! {
            ::sentinel_reactive::prelude::tokio::runtime::Builder::new_multi_thread()
        }
    };

    let fn_name = &sig.ident;
    let fn_inputs = &sig.inputs;
    let fn_output = &sig.output;

    let expanded = quote! {
        #(#attrs)*
        #vis fn #fn_name(#fn_inputs) #fn_output {
            #runtime_builder
                .enable_all()
                .build()
                .expect("Failed to build Sentinel runtime")
                .block_on(async #body)
        }
    };

    TokenStream::from(expanded)
}
