fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/project_costs.proto");
    tonic_build::configure()
        .build_server(true) // The engine serves ProjectCostService
        .build_client(true) // The GUI links against the engine crate for its client stub
        .compile(&["proto/project_costs.proto"], &["proto"])?;
    Ok(())
}
