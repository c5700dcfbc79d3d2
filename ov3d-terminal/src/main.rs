/// OV3D Terminal Viewer - Rotating OBJ Model
///
/// Loads a Wavefront OBJ file (or falls back to a built-in cube) and spins
/// it in the terminal. Controls:
///   - WASD / Arrow Keys: Rotate the model
///   - E/R: Roll rotation
///   - Q/ESC: Quit

use std::env;
use std::io;
use std::process::ExitCode;
use tracing::error;

use ov3d_core::{load_obj, Mesh};
use ov3d_terminal::TerminalApp;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    let mesh = match args.get(1) {
        Some(path) => match load_model(path) {
            Ok(mesh) => mesh,
            Err(e) => {
                error!("could not load {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            println!("No OBJ file provided, using default cube...");
            Mesh::cube(2.0)
        }
    };

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    if let Err(e) = run(mesh) {
        error!("renderer error: {e}");
        return ExitCode::FAILURE;
    }

    println!("Thank you for using the OV3D Terminal Viewer!");
    ExitCode::SUCCESS
}

fn load_model(path: &str) -> ov3d_core::Result<Mesh> {
    let data = load_obj(path)?;
    let mesh = Mesh::from_obj(&data)?;
    println!(
        "Loaded {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

fn run(mesh: Mesh) -> io::Result<()> {
    let mut app = TerminalApp::new(mesh)?;
    app.run()
}
