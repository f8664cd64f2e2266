use std::env;
use std::io::Result;

fn main() -> Result<()> {
    if env::var("PROTOC").is_err() {
        if let Ok(path) = protoc_bin_vendored::protoc_bin_path() {
            env::set_var("PROTOC", path);
        }
    }

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &[
                "proto/cosmos/base/v1beta1/coin.proto",
                "proto/cosmos/base/query/v1beta1/pagination.proto",
                "proto/cosmos/bank/v1beta1/query.proto",
            ],
            &["proto"],
        )?;

    println!("cargo:rerun-if-changed=proto");

    Ok(())
}
