/// Example: Load and render a Wavefront OBJ file in the terminal
///
/// Usage: cargo run --example load_obj -- path/to/model.obj

use std::env;
use std::io;

use ov3d_core::{load_obj, Mesh};
use ov3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <obj-file>", args[0]);
        eprintln!("\nNo OBJ file provided, using default cube...");
        // Use default cube
        let cube = Mesh::cube(2.0);
        let mut app = TerminalApp::new(cube)?;
        return app.run();
    }

    let obj_path = &args[1];

    println!("Loading OBJ file: {}", obj_path);

    let data = load_obj(obj_path)
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e.to_string()))?;

    let mesh = Mesh::from_obj(&data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    println!(
        "Loaded {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app
    let mut app = TerminalApp::new(mesh)?;
    app.run()?;

    println!("Thank you for using the OV3D Terminal Viewer!");
    Ok(())
}
