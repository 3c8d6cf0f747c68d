mod system;

use proc_macro::TokenStream;
use syn::DeriveInput;

/// Implements `phase_pipeline::systems::System` from a capability list.
///
/// ```ignore
/// #[derive(System)]
/// #[system(pre_init, init, run, world = "crate::MyWorld")]
/// struct Physics {
///     #[inject]
///     world: Option<WorldHandle<MyWorld>>,
/// }
/// ```
#[proc_macro_derive(System, attributes(system, inject))]
pub fn derive_system(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as DeriveInput);
    system::impl_system(&ast)
}
