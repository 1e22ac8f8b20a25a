use crix::boot::{BootConfig, BootSequencer};
use crix::skin::{SkinId, SkinRegistry, SkinSelector};
use crix::storage::NoopStore;
use crix::ui::{PageLayout, UI};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, style::Modifier, Terminal};
use std::sync::Arc;

fn selector(id: SkinId) -> SkinSelector {
    let mut selector = SkinSelector::new(
        Arc::new(SkinRegistry::builtin().unwrap()),
        Arc::new(NoopStore),
    );
    selector.select(id).unwrap();
    selector
}

fn draw(boot: &BootSequencer, selector: &SkinSelector) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(100, 36)).unwrap();
    let ui = UI::new();
    terminal.draw(|f| ui.render(f, boot, selector)).unwrap();
    terminal.backend().buffer().clone()
}

fn folded_text(buffer: &Buffer) -> String {
    buffer
        .content
        .iter()
        .flat_map(|cell| cell.symbol().chars())
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn main_view() -> BootSequencer {
    let mut boot = BootSequencer::new(BootConfig::default());
    boot.finish_now();
    boot
}

#[test]
fn test_skin_change_keeps_text_and_layout() {
    let boot = main_view();
    let reference = draw(&boot, &selector(SkinId::Y2k));

    for id in [SkinId::Terminal, SkinId::Dark, SkinId::Neocities] {
        let buffer = draw(&boot, &selector(id));
        assert_eq!(buffer.area, reference.area);
        assert_eq!(folded_text(&buffer), folded_text(&reference), "skin {}", id);
        assert_ne!(buffer, reference, "skin {} should restyle the page", id);
    }
}

#[test]
fn test_splash_text_identical_across_skins() {
    let mut boot = BootSequencer::new(BootConfig::default());
    for _ in 0..30 {
        boot.tick();
    }

    let reference = folded_text(&draw(&boot, &selector(SkinId::Y2k)));
    assert!(reference.contains("loadinguichrome"));
    assert!(reference.contains("30"));
    for id in SkinId::ALL {
        assert_eq!(folded_text(&draw(&boot, &selector(id))), reference);
    }
}

#[test]
fn test_layout_independent_of_skin() {
    let area = Rect::new(0, 0, 100, 36);
    let layout = PageLayout::compute(area);

    assert_eq!(layout, PageLayout::compute(area));
    assert_eq!(layout.header.width, 100);
    assert!(layout.features.height >= 5);
    assert_eq!(layout.footer.y + layout.footer.height, 36);
}

#[test]
fn test_terminal_skin_draws_scanlines() {
    let boot = main_view();
    let terminal = draw(&boot, &selector(SkinId::Terminal));
    let y2k = draw(&boot, &selector(SkinId::Y2k));

    assert!(terminal.get(0, 1).modifier.contains(Modifier::DIM));
    assert!(!y2k.get(0, 1).modifier.contains(Modifier::DIM));
}
