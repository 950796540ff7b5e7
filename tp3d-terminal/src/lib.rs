//! Terminal frame-loop shell for the painter renderer.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tp3d_core::{projection, transform, FrameRenderer, Model, Projector, SpinState};

pub mod canvas;

pub use canvas::CellCanvas;

/// Runtime options for the terminal app.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub distance: f32,
    pub step: f32,
    pub fps: u32,
    /// Uniform model scale; `None` picks `min(width, height) / 4`.
    pub scale: Option<f32>,
    pub start_paused: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            distance: projection::DEFAULT_DISTANCE,
            step: transform::DEFAULT_STEP,
            fps: 30,
            scale: None,
            start_paused: false,
        }
    }
}

/// Main application struct for the terminal renderer.
pub struct TerminalApp {
    renderer: FrameRenderer,
    canvas: CellCanvas,
    target_frame_time: Duration,
    running: bool,
    paused: bool,
    last_fps_update: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: AppConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let (width, height) = (width as u32, height as u32);

        let projector = Projector::new(width, height).with_distance(config.distance);
        let mut renderer = FrameRenderer::new(Model::cube(), projector);
        renderer.spin = SpinState::new(config.step);
        renderer.scale = config
            .scale
            .unwrap_or_else(|| width.min(height) as f32 / 4.0);

        log::info!(
            "terminal {}x{}, distance {}, step {}, scale {}",
            width,
            height,
            config.distance,
            config.step,
            renderer.scale
        );

        Ok(Self {
            renderer,
            canvas: CellCanvas::new(width as usize, height as usize),
            target_frame_time: Duration::from_millis(1000 / u64::from(config.fps.max(1))),
            running: true,
            paused: config.start_paused,
            last_fps_update: Instant::now(),
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

        log::info!("stopped at angle {:.3}", self.renderer.spin.angle());
        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Render, then step: the first visible frame shows the
            // unrotated model.
            self.render()?;
            if !self.paused {
                self.renderer.advance();
            }

            // Frame pacing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.target_frame_time {
                std::thread::sleep(self.target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_fps_update).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_fps_update).as_secs_f32();
                self.frame_count = 0;
                self.last_fps_update = now;
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
                KeyCode::Char('p') | KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.render(&mut self.canvas);

        let mut stdout = stdout();
        self.canvas.draw(&mut stdout)?;

        // Status overlay
        let status = format!(
            "TP3D | FPS: {:.1} | angle: {:.2} | P=Pause Q=Quit{}",
            self.fps,
            self.renderer.spin.angle(),
            if self.paused { " | PAUSED" } else { "" }
        );
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
