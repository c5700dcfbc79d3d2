/// Terminal-based ASCII rasterizer for 3D model viewing
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use ov3d_core::{Camera, Mesh, RotationState, Transform};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Radius the model is scaled to so it fills the view without clipping
const FIT_RADIUS: f32 = 1.5;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    mesh: Mesh,
    manual_rotation: RotationState,
    fit_scale: f32,
    camera: Camera,
    renderer: AsciiRenderer,
    running: bool,
    start_time: Instant,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let radius = mesh.bounding_radius();
        let fit_scale = if radius > 0.0 { FIT_RADIUS / radius } else { 1.0 };

        Ok(Self {
            mesh,
            manual_rotation: RotationState::zero(),
            fit_scale,
            camera: Camera::for_terminal(width, height),
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            start_time: Instant::now(),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.manual_rotation.rotate(0.1, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.manual_rotation.rotate(-0.1, 0.0, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.manual_rotation.rotate(0.0, -0.1, 0.0);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.manual_rotation.rotate(0.0, 0.1, 0.0);
                }
                KeyCode::Char('e') => {
                    self.manual_rotation.rotate(0.0, 0.0, 0.1);
                }
                KeyCode::Char('r') => {
                    self.manual_rotation.rotate(0.0, 0.0, -0.1);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Wall-clock spin plus whatever the user has steered with the keys
    fn current_rotation(&self) -> RotationState {
        let spin = RotationState::at_time(self.start_time.elapsed().as_secs_f64());
        RotationState::new(
            self.manual_rotation.x + spin.x,
            self.manual_rotation.y + spin.y,
            self.manual_rotation.z + spin.z,
        )
    }

    fn render(&mut self) -> io::Result<()> {
        let rotation = Transform::rotation_matrix(&self.current_rotation());
        let scale = Transform::scale_matrix(self.fit_scale, self.fit_scale, self.fit_scale);
        let model = rotation * scale;

        // Clear renderer
        self.renderer.clear();

        // Render mesh
        self.renderer.render_mesh(&self.mesh, &model, &self.camera);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "OV3D Terminal Viewer | FPS: {:.1} | Controls: WASD/Arrows=Rotate E/R=Roll Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
