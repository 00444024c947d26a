// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::io::Result;

#[cfg(feature = "generate-protobuf")]
use {
    std::env,
    std::fs::File,
    std::io::{Read, Write},
    std::path::Path,
};

// to re-generate protobuf structs, run cargo build --features generate-protobuf
fn main() -> Result<()> {
    #[cfg(feature = "generate-protobuf")]
    {
        let protoc = protoc_bin_vendored::protoc_bin_path()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))?;
        env::set_var("PROTOC", protoc);

        generate_protobuf()?;
    }
    Ok(())
}

#[cfg(feature = "generate-protobuf")]
fn generate_protobuf() -> Result<()> {
    let mut config = prost_build::Config::new();

    let cur_working_dir = env::var("CARGO_MANIFEST_DIR")
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))?;
    let output_path = Path::new(&cur_working_dir).join("src");

    config.out_dir(output_path.clone());

    config.compile_protos(
        &[
            "src/pb/agent_payload.proto",
            "src/pb/tracer_payload.proto",
            "src/pb/span.proto",
        ],
        &["src/pb/"],
    )?;

    // add the license header to the top of the generated structs file
    let license = "// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

"
    .as_bytes();
    prepend_to_file(license, &output_path.join("pb.rs"))
}

#[cfg(feature = "generate-protobuf")]
fn prepend_to_file(data: &[u8], file_path: &Path) -> Result<()> {
    let mut f = File::open(file_path)?;
    let mut content = data.to_owned();
    f.read_to_end(&mut content)?;

    let mut f = File::create(file_path)?;
    f.write_all(content.as_slice())
}
