use std::env;
use std::fs::File;
use std::path::PathBuf;

use gl_generator::{Api, Fallbacks, Profile, Registry};

fn main() {
    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    println!("cargo:rerun-if-changed=build.rs");

    // No fallbacks: a loaded pointer always belongs to the symbol of the same name.
    let mut file = File::create(dest.join("gles30_bindings.rs")).unwrap();
    Registry::new(Api::Gles2, (3, 0), Profile::Core, Fallbacks::None, [])
        .write_bindings(gl_generator::StructGenerator, &mut file)
        .unwrap();
}
