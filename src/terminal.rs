// SPDX-License-Identifier: GPL-3.0-only

//! Terminal-based camera screen
//!
//! Renders the live preview using Unicode half-block characters for improved
//! vertical resolution, and translates key and mouse input into application
//! messages. Mouse dragging emulates a two-finger pinch: the press position
//! is one finger, the moving cursor the other, so the gesture controller
//! receives genuine two-point touch samples.

use crate::app::gesture::{TouchPoint, zoom_label};
use crate::app::{AppModel, Message};
use crate::backends::camera::CameraPipeline;
use crate::backends::camera::types::CameraFrame;
use crate::constants::ui::{DRAG_PIXELS_PER_CELL, INPUT_POLL_INTERVAL};
use crate::constants::zoom::PREVIEW_MAX_MAGNIFICATION;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal, backend::CrosstermBackend, buffer::Buffer, layout::Rect, style::Color,
    widgets::Widget,
};
use std::io::{self, stdout};
use std::sync::Arc;
use tracing::info;

/// Run the camera screen
pub fn run(model: AppModel) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, model);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Mouse-drag pinch emulation
///
/// The press position anchors one finger; the dragged cursor is the other.
/// Cell coordinates scale up to screen-space pixels so drag distances land
/// in the same range real touch gestures produce.
#[derive(Default)]
struct PinchEmulation {
    anchor: Option<(u16, u16)>,
}

impl PinchEmulation {
    fn begin(&mut self, column: u16, row: u16) {
        self.anchor = Some((column, row));
    }

    fn sample(&self, column: u16, row: u16) -> Option<Vec<TouchPoint>> {
        let (ax, ay) = self.anchor?;
        Some(vec![
            cell_to_touch(ax, ay),
            cell_to_touch(column, row),
        ])
    }

    fn end(&mut self) {
        self.anchor = None;
    }
}

fn cell_to_touch(column: u16, row: u16) -> TouchPoint {
    TouchPoint::new(
        column as f64 * DRAG_PIXELS_PER_CELL,
        // Terminal cells are roughly twice as tall as wide
        row as f64 * DRAG_PIXELS_PER_CELL * 2.0,
    )
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut model: AppModel,
) -> Result<(), Box<dyn std::error::Error>> {
    let device = model
        .current_camera()
        .cloned()
        .ok_or("No cameras found")?;
    info!(camera = %device.name, "Starting preview");

    let mut pipeline = CameraPipeline::start(&device)?;
    let mut pipeline_index = model.current_camera_index;
    let mut pinch = PinchEmulation::default();
    let mut show_help = false;

    loop {
        // Drain all available frames to render the latest
        while let Some(frame) = pipeline.try_next_frame() {
            dispatch(&mut model, Message::CameraFrame(Arc::new(frame)));
        }

        model.status.try_clear();

        terminal.draw(|f| {
            let area = f.area();

            let preview_area = Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height.saturating_sub(1),
            };
            f.render_widget(
                PreviewWidget {
                    frame: model.current_frame.as_deref(),
                    zoom: model.zoom.level(),
                    mirror: model.config.mirror_preview,
                },
                preview_area,
            );

            let status_area = Rect {
                x: area.x,
                y: area.height.saturating_sub(1),
                width: area.width,
                height: 1,
            };
            let line = status_line(&model, show_help);
            f.render_widget(StatusBar { message: &line }, status_area);
        })?;

        // Handle input with timeout for frame updates
        if event::poll(INPUT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }
                    match key.code {
                        KeyCode::Char('q') => break,
                        KeyCode::Char('p') | KeyCode::Char(' ') => {
                            show_help = false;
                            dispatch(&mut model, Message::Capture);
                        }
                        KeyCode::Char('s') => {
                            show_help = false;
                            dispatch(&mut model, Message::SwitchCamera);
                        }
                        KeyCode::Char('m') => dispatch(&mut model, Message::ToggleMirrorPreview),
                        KeyCode::Char('+') | KeyCode::Char('=') => {
                            dispatch(&mut model, Message::ZoomIn)
                        }
                        KeyCode::Char('-') => dispatch(&mut model, Message::ZoomOut),
                        KeyCode::Char('0') => dispatch(&mut model, Message::ResetZoom),
                        KeyCode::Char('g') => dispatch(&mut model, Message::OpenGallery),
                        KeyCode::Char('h') => show_help = !show_help,
                        _ => {}
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => dispatch(&mut model, Message::ZoomIn),
                    MouseEventKind::ScrollDown => dispatch(&mut model, Message::ZoomOut),
                    MouseEventKind::Down(MouseButton::Left) => {
                        pinch.begin(mouse.column, mouse.row);
                    }
                    MouseEventKind::Drag(MouseButton::Left) => {
                        if let Some(touches) = pinch.sample(mouse.column, mouse.row) {
                            dispatch(&mut model, Message::TouchSample(touches));
                        }
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        pinch.end();
                        dispatch(&mut model, Message::TouchEnd);
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // Rebuild the pipeline after a camera switch
        if model.current_camera_index != pipeline_index {
            let device = model
                .current_camera()
                .cloned()
                .ok_or("No cameras found")?;
            drop(pipeline);
            pipeline = CameraPipeline::start(&device)?;
            pipeline_index = model.current_camera_index;
        }
    }

    Ok(())
}

/// Feed a message and its follow-ups through the model
fn dispatch(model: &mut AppModel, message: Message) {
    let mut queue = std::collections::VecDeque::from([message]);
    while let Some(message) = queue.pop_front() {
        queue.extend(model.update(message));
    }
}

fn status_line(model: &AppModel, show_help: bool) -> String {
    if show_help {
        return "space/p: Photo | s: Switch camera | m: Mirror | drag/scroll/+/-: Zoom \
                | 0: Reset zoom | g: Gallery | q: Quit"
            .to_string();
    }
    if let Some(message) = model.status.message() {
        return message.to_string();
    }
    let camera = model
        .current_camera()
        .map(|c| c.name.as_str())
        .unwrap_or("No camera");
    format!(
        "[{}] {} | 'h' help | 'q' quit",
        zoom_label(model.zoom.level()),
        camera
    )
}

/// Widget that renders a frame with half-block characters
///
/// Applies the digital zoom (center crop) and mirror flip at sampling time,
/// the same parameters a real preview surface would receive.
struct PreviewWidget<'a> {
    frame: Option<&'a CameraFrame>,
    zoom: f64,
    mirror: bool,
}

impl Widget for PreviewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(frame) = self.frame else {
            let msg = "Waiting for camera...";
            let x = area.x + (area.width.saturating_sub(msg.len() as u16)) / 2;
            let y = area.y + area.height / 2;
            if y < area.y + area.height && x < area.x + area.width {
                buf.set_string(x, y, msg, ratatui::style::Style::default());
            }
            return;
        };

        // Fit the frame into the area, maintaining aspect ratio. Each cell
        // shows 2 vertical pixels via the upper-half-block glyph.
        let frame_aspect = frame.width as f64 / frame.height as f64;
        let term_width = area.width as f64;
        let term_height = (area.height * 2) as f64;

        let (display_width, display_height) = if term_width / term_height > frame_aspect {
            let h = term_height;
            ((h * frame_aspect) as u16, (h / 2.0) as u16)
        } else {
            let w = term_width;
            (w as u16, (w / frame_aspect / 2.0) as u16)
        };

        let x_offset = area.x + (area.width.saturating_sub(display_width)) / 2;
        let y_offset = area.y + (area.height.saturating_sub(display_height)) / 2;

        // Normalized zoom maps linearly onto a center-crop magnification
        let magnification = 1.0 + self.zoom * (PREVIEW_MAX_MAGNIFICATION - 1.0);

        let sample = |u: f64, v: f64| -> Color {
            // Zoom around the frame center
            let mut su = 0.5 + (u - 0.5) / magnification;
            let sv = 0.5 + (v - 0.5) / magnification;
            if self.mirror {
                su = 1.0 - su;
            }
            let x = (su * frame.width as f64) as u32;
            let y = (sv * frame.height as f64) as u32;
            let (r, g, b) = frame.sample_rgb(x, y);
            Color::Rgb(r, g, b)
        };

        for ty in 0..display_height {
            for tx in 0..display_width {
                let term_x = x_offset + tx;
                let term_y = y_offset + ty;
                if term_x >= area.x + area.width || term_y >= area.y + area.height {
                    continue;
                }

                let u = (tx as f64 + 0.5) / display_width as f64;
                let v_top = (ty as f64 * 2.0 + 0.5) / (display_height as f64 * 2.0);
                let v_bottom = (ty as f64 * 2.0 + 1.5) / (display_height as f64 * 2.0);

                if let Some(cell) = buf.cell_mut((term_x, term_y)) {
                    cell.set_char('▀');
                    cell.set_fg(sample(u, v_top));
                    cell.set_bg(sample(u, v_bottom));
                }
            }
        }
    }
}

/// Status bar widget
struct StatusBar<'a> {
    message: &'a str,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ');
                cell.set_bg(Color::DarkGray);
            }
        }

        let text = if self.message.len() > area.width as usize {
            &self.message[..area.width as usize]
        } else {
            self.message
        };

        buf.set_string(
            area.x,
            area.y,
            text,
            ratatui::style::Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray),
        );
    }
}
