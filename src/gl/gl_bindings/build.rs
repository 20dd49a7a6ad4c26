/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
use gl_generator::{Api, Fallbacks, GlobalGenerator, Profile, Registry};
use std::fs::File;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());

    // The compatibility profile is needed because the wrapped surface still
    // includes the fixed-function pipeline.
    let mut file = File::create(out_dir.join("gl46compat.rs")).unwrap();
    Registry::new(
        Api::Gl,
        (4, 6),
        Profile::Compatibility,
        Fallbacks::None,
        [
            "GL_ARB_bindless_texture",
            "GL_EXT_framebuffer_object",
            "GL_EXT_texture_filter_anisotropic",
            "GL_NV_primitive_restart",
            "GL_NVX_gpu_memory_info",
        ],
    )
    .write_bindings(GlobalGenerator, &mut file)
    .unwrap();
}
