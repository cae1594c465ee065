use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use eframe::egui;

use crate::config::Config;
use crate::deck::Deck;
use crate::nav::Navigator;
use crate::render;
use crate::render::transition::{Entrance, TransitionKind};
use crate::theme::Theme;

/// Walks the deck in global order, one screenshot per slide.
struct ExportApp {
    navigator: Navigator,
    theme: Theme,
    output_dir: PathBuf,
    current: usize,
    screenshot_requested: bool,
    saved: Arc<AtomicUsize>,
    done: bool,
}

impl ExportApp {
    fn new(deck: Deck, theme: Theme, output_dir: PathBuf, saved: Arc<AtomicUsize>) -> Self {
        Self {
            navigator: Navigator::new(deck),
            theme,
            output_dir,
            current: 0,
            screenshot_requested: false,
            saved,
            done: false,
        }
    }
}

/// File name for the slide at a zero-based global position.
pub fn slide_filename(global: usize) -> String {
    format!("slide-{:02}.png", global + 1)
}

impl eframe::App for ExportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.done {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Screenshot requested last frame arrives as an event this frame.
        let mut got_screenshot = false;
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Screenshot { image, .. } = event {
                    let filename = slide_filename(self.current);
                    let path = self.output_dir.join(&filename);
                    match save_color_image(image, &path) {
                        Ok(()) => {
                            self.saved.fetch_add(1, Ordering::Relaxed);
                            tracing::info!("saved {filename}");
                        }
                        Err(e) => tracing::error!("failed to save {}: {e}", path.display()),
                    }
                    got_screenshot = true;
                }
            }
        });

        if got_screenshot {
            self.screenshot_requested = false;
            self.current += 1;
            if self.navigator.seek(self.current).is_err() {
                self.done = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
        }

        let bg = self.theme.background;
        let entrance = Entrance::settled(TransitionKind::None);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                render::draw_viewer(ui, &self.navigator, &self.theme, rect, &entrance);
            });

        if !self.screenshot_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
            self.screenshot_requested = true;
        }

        ctx.request_repaint();
    }
}

fn save_color_image(image: &egui::ColorImage, path: &Path) -> anyhow::Result<()> {
    let width = image.width() as u32;
    let height = image.height() as u32;
    let pixels: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| [c.r(), c.g(), c.b(), c.a()])
        .collect();

    image::save_buffer(path, &pixels, width, height, image::ColorType::Rgba8)?;
    Ok(())
}

pub fn run(output_dir: PathBuf, width: u32, height: u32) -> anyhow::Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("Export size must be non-zero, got {width}x{height}");
    }

    let deck = Deck::builtin();
    let slide_count = deck.total_slide_count();
    let config = Config::load_or_default();
    let theme = Theme::from_name(config.theme().unwrap_or("light"));

    std::fs::create_dir_all(&output_dir)?;
    tracing::info!(
        "exporting {slide_count} slides to {} ({width}x{height})",
        output_dir.display()
    );

    let title = "tabdeck export";
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([width as f32, height as f32])
        .with_title(title)
        .with_decorations(false);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let saved = Arc::new(AtomicUsize::new(0));
    let app_saved = Arc::clone(&saved);
    let app_dir = output_dir.clone();
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(ExportApp::new(deck, theme, app_dir, app_saved)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    let saved = saved.load(Ordering::Relaxed);
    if saved < slide_count {
        anyhow::bail!(
            "Exported {saved} of {slide_count} slides to {}",
            output_dir.display()
        );
    }
    eprintln!("Exported {saved} slides to {}", output_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_filenames_are_one_based_and_padded() {
        assert_eq!(slide_filename(0), "slide-01.png");
        assert_eq!(slide_filename(15), "slide-16.png");
        assert_eq!(slide_filename(99), "slide-100.png");
    }

    #[test]
    fn test_save_color_image_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(slide_filename(0));
        let rgba: Vec<u8> = [255, 0, 0, 255].repeat(8);
        let image = egui::ColorImage::from_rgba_unmultiplied([4, 2], &rgba);
        save_color_image(&image, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(dir.path().to_path_buf(), 0, 1080).unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }
}
