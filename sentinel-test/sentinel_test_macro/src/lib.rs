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

//! The `#[sentinel_test]` attribute.
//!
//! Turns an `async fn` returning a `Result` into a synchronous `#[test]` that
//! drives the body on a fresh multi-threaded Tokio runtime, tags everything the
//! test logs with a `sentinel_test` span, and re-raises any panic observed
//! anywhere in the runtime (including inside spawned actor tasks) with its
//! location attached.

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, ItemFn};

#[proc_macro_attribute]
pub fn sentinel_test(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let vis = &input.vis;
    let sig = &input.sig;
    let body = &input.block;
    let attrs = &input.attrs;
    let name = &sig.ident;
    let inputs = &sig.inputs;
    let output = &sig.output;

    if sig.asyncness.is_none() {
        return syn::Error::new_spanned(
            sig.fn_token,
            "sentinel_test can only be applied to async functions",
        )
        .to_compile_error()
        .into();
    }

    let async_name = syn::Ident::new(&format!("__{name}_async"), name.span());

    let output = quote! {
        #[test]
        #(#attrs)*
        #vis fn #name() {
            use std::sync::atomic::{AtomicBool, Ordering};
            use std::sync::Arc;
            use std::panic;
            use ::sentinel_test::__private::{parking_lot, tokio, tracing};

            #[derive(Clone, Default)]
            struct PanicInfo {
                occurred: Arc<AtomicBool>,
                message: Arc<parking_lot::Mutex<Option<String>>>,
                location: Arc<parking_lot::Mutex<Option<String>>>,
            }

            let panic_info = Arc::new(PanicInfo::default());
            let panic_info_clone = Arc::clone(&panic_info);

            let orig_hook = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                panic_info_clone.occurred.store(true, Ordering::SeqCst);
                let payload = info
                    .payload()
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| info.payload().downcast_ref::<String>().cloned());
                *panic_info_clone.message.lock() = payload;
                *panic_info_clone.location.lock() = info
                    .location()
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
                let cleaned = panic_info_clone
                    .message
                    .lock()
                    .clone()
                    .unwrap_or_else(|| "No error message".to_string())
                    .trim()
                    .replace('\n', " ");
                tracing::error!("Panic: {}", cleaned);
                orig_hook(info);
            }));

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("failed to build test runtime");

            let result = runtime.block_on(async {
                let test_span = tracing::info_span!("sentinel_test", name = stringify!(#name));
                let _enter = test_span.enter();
                #async_name().await
            });
            drop(runtime);

            if panic_info.occurred.load(Ordering::SeqCst) {
                let location = panic_info
                    .location
                    .lock()
                    .clone()
                    .unwrap_or_else(|| "unknown location".to_string());
                let message = panic_info
                    .message
                    .lock()
                    .clone()
                    .unwrap_or_else(|| "No error message".to_string());
                panic!("Panic at {}: {}", location, message.trim().replace('\n', " "));
            }

            if let Err(err) = result {
                panic!("test returned an error: {:?}", err);
            }
        }

        async fn #async_name(#inputs) #output #body
    };

    output.into()
}
