use camino::{Utf8Path, Utf8PathBuf};
use chartscene::svg::to_svg;
use miette::{IntoDiagnostic, WrapErr, miette};
use rayon::prelude::*;
use serde_json::Value;
use std::fs;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  render [dir]    Render every {{config, data}} JSON file in dir to SVG plus a gallery");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "render" => {
            let dir = match args.get(2) {
                Some(dir) => Utf8PathBuf::from(dir),
                None => Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/fixtures"),
            };
            render_dir(&dir)
        }
        other => {
            eprintln!("Unknown command: {other}");
            std::process::exit(1);
        }
    }
}

/// Outcome of rendering one input file
struct Rendered {
    name: String,
    result: Result<String, String>,
}

fn render_dir(dir: &Utf8Path) -> miette::Result<()> {
    let mut inputs: Vec<Utf8PathBuf> = dir
        .read_dir_utf8()
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {dir}"))?
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension() == Some("json"))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        return Err(miette!("no .json inputs in {dir}"));
    }

    let out_dir = dir.join("rendered");
    fs::create_dir_all(&out_dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("creating {out_dir}"))?;

    let results: Vec<Rendered> = inputs
        .par_iter()
        .map(|path| {
            let name = path.file_stem().unwrap_or("chart").to_string();
            tracing::info!(%name, "rendering");
            let result = render_file(path).and_then(|svg| {
                let target = out_dir.join(format!("{name}.svg"));
                fs::write(&target, &svg)
                    .map_err(|e| format!("writing {target}: {e}"))
                    .map(|()| svg)
            });
            Rendered { name, result }
        })
        .collect();

    let failed = results.iter().filter(|r| r.result.is_err()).count();
    for r in &results {
        if let Err(e) = &r.result {
            tracing::warn!(name = %r.name, error = %e, "render failed");
        }
    }

    let gallery = out_dir.join("index.html");
    fs::write(&gallery, gallery_html(&results))
        .into_diagnostic()
        .wrap_err_with(|| format!("writing {gallery}"))?;
    println!(
        "Rendered {} of {} charts, gallery at: {gallery}",
        results.len() - failed,
        results.len()
    );

    if failed > 0 {
        return Err(miette!("{failed} chart(s) failed to render"));
    }
    Ok(())
}

fn render_file(path: &Utf8Path) -> Result<String, String> {
    let source = fs::read_to_string(path).map_err(|e| format!("reading {path}: {e}"))?;
    let input: Value = serde_json::from_str(&source).map_err(|e| format!("parsing {path}: {e}"))?;
    let config = input.get("config").cloned().unwrap_or(Value::Object(Default::default()));
    let data = input.get("data").cloned().unwrap_or(Value::Array(Vec::new()));

    let scene = chartscene::synthesize_json(&config.to_string(), &data.to_string())
        .map_err(|e| format!("{:?}", miette::Report::new(e)))?;
    to_svg(&scene).map_err(|e| format!("{:?}", miette::Report::new(e)))
}

fn gallery_html(results: &[Rendered]) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>chartscene gallery</title>
    <style>
        body { font-family: system-ui, sans-serif; background: #eee; margin: 0; padding: 24px; }
        .card { background: white; border-radius: 8px; margin-bottom: 16px; padding: 12px 16px; }
        .title { font-weight: 600; font-size: 13px; margin-bottom: 8px; }
        .error { color: #b91c1c; white-space: pre-wrap; font-family: monospace; font-size: 12px; }
    </style>
</head>
<body>
"#,
    );

    for r in results {
        let body = match &r.result {
            Ok(svg) => svg.clone(),
            Err(e) => format!(r#"<div class="error">{}</div>"#, html_escape(e)),
        };
        html.push_str(&format!(
            "<div class=\"card\" id=\"{name}\">\n<div class=\"title\">{name}</div>\n{body}</div>\n",
            name = html_escape(&r.name),
        ));
    }

    html.push_str("</body></html>\n");
    html
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
