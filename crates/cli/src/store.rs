use anyhow::{bail, Context, Result};
use basegeom::{GeomCfg, Point, PolygonRegistry};
use std::fs;
use std::path::Path;

/// Longest record line the map's preload files accept.
pub const MAX_RECORD_CHARS: usize = 259;

const NAME_SEP: char = '|';
const CONTINUATION: char = '+';
const VERTEX_SEP: char = ';';

/// One saved base: display name plus vertices in perimeter order.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseRecord {
    pub name: String,
    pub points: Vec<Point>,
}

/// Lines for one base: `name|x1,y1;x2,y2;...`, then `+x,y;...` continuation
/// lines once the budget is used up. No line exceeds `MAX_RECORD_CHARS`.
pub fn encode_record(name: &str, points: &[Point]) -> Result<Vec<String>> {
    if name.contains([NAME_SEP, '\n', '\r']) || name.starts_with(CONTINUATION) {
        bail!("base name {name:?} contains a reserved character");
    }
    let mut lines = Vec::new();
    let mut line = format!("{name}{NAME_SEP}");
    if line.chars().count() > MAX_RECORD_CHARS {
        bail!("base name {name:?} leaves no room under the {MAX_RECORD_CHARS} character limit");
    }
    let mut fresh = true;
    for p in points {
        let token = format!("{},{}", p.x, p.y);
        let sep = usize::from(!fresh);
        if line.chars().count() + sep + token.len() > MAX_RECORD_CHARS {
            lines.push(std::mem::replace(&mut line, CONTINUATION.to_string()));
            fresh = true;
            if 1 + token.len() > MAX_RECORD_CHARS {
                bail!("vertex {token} of base {name:?} exceeds the line limit");
            }
        }
        if !fresh {
            line.push(VERTEX_SEP);
        }
        line.push_str(&token);
        fresh = false;
    }
    lines.push(line);
    Ok(lines)
}

fn decode_vertices(body: &str, out: &mut Vec<Point>) -> Result<()> {
    for pair in body.split(VERTEX_SEP).filter(|s| !s.trim().is_empty()) {
        let (x, y) = pair
            .split_once(',')
            .with_context(|| format!("vertex {pair:?} is not x,y"))?;
        let x: f64 = x.trim().parse().with_context(|| format!("bad x in {pair:?}"))?;
        let y: f64 = y.trim().parse().with_context(|| format!("bad y in {pair:?}"))?;
        if !x.is_finite() || !y.is_finite() {
            bail!("vertex {pair:?} is not finite");
        }
        out.push(Point::new(x, y));
    }
    Ok(())
}

/// Parse the first line of a record.
pub fn decode_record(line: &str) -> Result<BaseRecord> {
    let (name, body) = line
        .split_once(NAME_SEP)
        .with_context(|| format!("missing '{NAME_SEP}' separator"))?;
    let mut points = Vec::new();
    decode_vertices(body, &mut points)?;
    Ok(BaseRecord {
        name: name.to_string(),
        points,
    })
}

/// Read every record; blank lines are skipped.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<BaseRecord>> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut out: Vec<BaseRecord> = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let chars = line.chars().count();
        if chars > MAX_RECORD_CHARS {
            bail!(
                "{}:{}: line has {chars} characters, limit is {MAX_RECORD_CHARS}",
                path.display(),
                i + 1
            );
        }
        let at = || format!("{}:{}", path.display(), i + 1);
        if let Some(rest) = line.strip_prefix(CONTINUATION) {
            let Some(last) = out.last_mut() else {
                bail!("{}: continuation line without a base", at());
            };
            decode_vertices(rest, &mut last.points).with_context(at)?;
        } else {
            out.push(decode_record(line).with_context(at)?);
        }
    }
    Ok(out)
}

/// Registry holding the file's bases in file order, querying with `cfg`.
/// A missing file is an empty registry.
pub fn load_registry<P: AsRef<Path>>(path: P, cfg: GeomCfg) -> Result<PolygonRegistry> {
    let path = path.as_ref();
    let mut reg = PolygonRegistry::with_cfg(cfg);
    if !path.exists() {
        tracing::info!(path = %path.display(), "no base file yet");
        return Ok(reg);
    }
    for rec in read_records(path)? {
        reg.create_named(rec.name, rec.points);
    }
    tracing::info!(path = %path.display(), bases = reg.count(), "bases loaded");
    Ok(reg)
}

/// Write all bases in index order, one record (plus continuations) per base.
pub fn save_registry<P: AsRef<Path>>(path: P, reg: &PolygonRegistry) -> Result<()> {
    let path = path.as_ref();
    let mut text = String::new();
    for poly in reg {
        let lines = encode_record(&poly.name, poly.points())
            .with_context(|| format!("encoding base #{}", poly.index()))?;
        for line in lines {
            text.push_str(&line);
            text.push('\n');
        }
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating base dir {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bases = reg.count(), "bases saved");
    Ok(())
}
