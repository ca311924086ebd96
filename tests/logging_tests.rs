use std::io;
use std::sync::{Arc, Mutex};

use chartscene::{DataPoint, GraphConfig, Series, Variant, synthesize, synthesize_series};

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn logged(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn degraded_input_is_logged() {
    let out = logged(|| {
        synthesize(&GraphConfig::new(Variant::Pie), vec![DataPoint::new("a", 0.0)]);
    });
    assert!(out.contains("pie total is zero"), "{out}");
    assert!(out.contains("WARN"), "{out}");
}

#[test]
fn every_scene_gets_a_debug_line() {
    let out = logged(|| {
        synthesize(&GraphConfig::new(Variant::Bar), vec![DataPoint::new("Jan", 3.0)]);
    });
    assert!(out.contains("synthesized scene"), "{out}");
    assert!(out.contains("variant=\"bar\"") || out.contains("variant=bar"), "{out}");
}

#[test]
fn extra_horizontal_series_are_reported() {
    let series = vec![
        Series::new("A", vec![DataPoint::new("x", 1.0)]),
        Series::new("B", vec![DataPoint::new("x", 2.0)]),
    ];
    let out = logged(|| {
        synthesize_series(&GraphConfig::new(Variant::HorizontalBar), &series);
    });
    assert!(out.contains("horizontal bar charts draw only the first series"), "{out}");
}
