//! Line commands for the interactive loop.

use std::fmt;
use std::str::FromStr;

use gradia_ui::prelude::*;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(EditorEvent),
    Show,
    Css,
    Presets,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError(String);

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for CommandError {}

fn err(msg: impl Into<String>) -> CommandError {
    CommandError(msg.into())
}

pub const HELP: &str = "\
layers:  add | select <id> | remove [id] | up [id] | down [id]
layer:   type <name> | angle <deg> | x <offset> | y <offset> | blend <mode>
         shape <circle|ellipse> | size <keyword>
stops:   stop add | stop color <i> <hex> | stop pos <i> <n> | stop unit <i> <%|px>
         stop opacity <i> <0-100> | stop rm <i>
other:   preview <rectangle|circle> | preset <name> | presets | copy | css | show
         help | quit";

/// Parses one line. Blank lines and `#` comments yield `Ok(None)`.
///
/// `selected` stands in for an omitted layer id.
pub fn parse_command(line: &str, selected: Option<LayerId>) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let layer_arg = |args: &[&str]| -> Result<LayerId, CommandError> {
        match args.first() {
            Some(raw) => raw.parse().map_err(|e| err(format!("{e}"))),
            None => selected.ok_or_else(|| err("no layer selected")),
        }
    };

    let event = match head {
        "show" => return Ok(Some(Command::Show)),
        "css" => return Ok(Some(Command::Css)),
        "presets" => return Ok(Some(Command::Presets)),
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" | "q" => return Ok(Some(Command::Quit)),

        "add" => EditorEvent::AddLayer,
        "select" => EditorEvent::SelectLayer(value(&args, 0, "layer id")?),
        "remove" | "rm" => EditorEvent::RemoveLayer(layer_arg(&args)?),
        "up" => EditorEvent::MoveLayer(layer_arg(&args)?, Direction::Up),
        "down" => EditorEvent::MoveLayer(layer_arg(&args)?, Direction::Down),

        "type" => EditorEvent::SetKind(GradientKind::parse(word(&args, 0, "gradient type")?)),
        "angle" => EditorEvent::SetAngle(value(&args, 0, "angle")?),
        "x" => EditorEvent::SetPositionX(value(&args, 0, "offset")?),
        "y" => EditorEvent::SetPositionY(value(&args, 0, "offset")?),
        "blend" => EditorEvent::SetBlendMode(value(&args, 0, "blend mode")?),
        "shape" => EditorEvent::SetRadialShape(value(&args, 0, "radial shape")?),
        "size" => EditorEvent::SetRadialSize(value(&args, 0, "radial size")?),

        "stop" => parse_stop(&args)?,

        "preview" => EditorEvent::SetPreviewShape(value(&args, 0, "preview shape")?),
        "preset" => EditorEvent::LoadPreset(word(&args, 0, "preset name")?.to_string()),
        "copy" => EditorEvent::CopyCss,

        other => return Err(err(format!("unknown command `{other}` (try `help`)"))),
    };
    Ok(Some(Command::Event(event)))
}

fn parse_stop(args: &[&str]) -> Result<EditorEvent, CommandError> {
    let sub = word(args, 0, "stop command")?;
    if sub == "add" {
        return Ok(EditorEvent::AddColorStop);
    }
    let index: usize = value(args, 1, "stop index")?;
    let event = match sub {
        "color" => EditorEvent::SetStopColor { index, color: word(args, 2, "color")?.to_string() },
        "pos" | "position" => {
            let position: f32 = value(args, 2, "position")?;
            if !position.is_finite() {
                return Err(err("position must be a finite number"));
            }
            EditorEvent::SetStopPosition { index, position }
        }
        "unit" => EditorEvent::SetStopUnit { index, unit: value(args, 2, "unit")? },
        "opacity" => {
            let opacity: u8 = value(args, 2, "opacity")?;
            if opacity > ColorStop::MAX_OPACITY {
                return Err(err("opacity must be 0-100"));
            }
            EditorEvent::SetStopOpacity { index, opacity }
        }
        "rm" | "remove" => EditorEvent::RemoveColorStop(index),
        other => return Err(err(format!("unknown stop command `{other}`"))),
    };
    Ok(event)
}

fn word<'a>(args: &[&'a str], at: usize, what: &str) -> Result<&'a str, CommandError> {
    args.get(at).copied().ok_or_else(|| err(format!("missing {what}")))
}

fn value<T>(args: &[&str], at: usize, what: &str) -> Result<T, CommandError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = word(args, at, what)?;
    raw.parse().map_err(|e| err(format!("bad {what} `{raw}`: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(line: &str) -> EditorEvent {
        match parse_command(line, "layer-0".parse().ok()).unwrap() {
            Some(Command::Event(e)) => e,
            other => panic!("expected event, got {other:?}"),
        }
    }

    fn error(line: &str) -> String {
        parse_command(line, None).unwrap_err().to_string()
    }

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(parse_command("   ", None).unwrap(), None);
        assert_eq!(parse_command("# note", None).unwrap(), None);
    }

    #[test]
    fn meta_commands() {
        assert_eq!(parse_command("show", None).unwrap(), Some(Command::Show));
        assert_eq!(parse_command("quit", None).unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("presets", None).unwrap(), Some(Command::Presets));
    }

    #[test]
    fn layer_commands() {
        let l2: LayerId = "layer-2".parse().unwrap();
        assert_eq!(event("add"), EditorEvent::AddLayer);
        assert_eq!(event("select layer-2"), EditorEvent::SelectLayer(l2));
        assert_eq!(event("select 2"), EditorEvent::SelectLayer(l2));
        assert_eq!(event("up 2"), EditorEvent::MoveLayer(l2, Direction::Up));
    }

    #[test]
    fn omitted_id_uses_selection() {
        let l0: LayerId = "layer-0".parse().unwrap();
        assert_eq!(event("remove"), EditorEvent::RemoveLayer(l0));
        assert_eq!(event("down"), EditorEvent::MoveLayer(l0, Direction::Down));
        assert_eq!(error("remove"), "no layer selected");
    }

    #[test]
    fn field_commands() {
        assert_eq!(event("type conic-gradient"), EditorEvent::SetKind(GradientKind::Conic));
        assert_eq!(event("angle -45"), EditorEvent::SetAngle(-45));
        assert_eq!(event("x 20"), EditorEvent::SetPositionX(20));
        assert_eq!(event("blend color-dodge"), EditorEvent::SetBlendMode(BlendMode::ColorDodge));
        assert_eq!(event("shape circle"), EditorEvent::SetRadialShape(RadialShape::Circle));
        assert_eq!(event("size farthest-side"), EditorEvent::SetRadialSize(RadialSize::FarthestSide));
        assert_eq!(event("preview circle"), EditorEvent::SetPreviewShape(PreviewShape::Circle));
    }

    #[test]
    fn stop_commands() {
        assert_eq!(event("stop add"), EditorEvent::AddColorStop);
        assert_eq!(
            event("stop color 1 #ff0000"),
            EditorEvent::SetStopColor { index: 1, color: "#ff0000".into() }
        );
        assert_eq!(event("stop pos 0 12.5"), EditorEvent::SetStopPosition { index: 0, position: 12.5 });
        assert_eq!(event("stop unit 0 px"), EditorEvent::SetStopUnit { index: 0, unit: StopUnit::Px });
        assert_eq!(event("stop opacity 2 40"), EditorEvent::SetStopOpacity { index: 2, opacity: 40 });
        assert_eq!(event("stop rm 1"), EditorEvent::RemoveColorStop(1));
    }

    #[test]
    fn malformed_commands() {
        assert!(error("angle").contains("missing angle"));
        assert!(error("angle steep").contains("bad angle"));
        assert!(error("blend sparkle").contains("bad blend mode"));
        assert!(error("stop opacity 0 150").contains("0-100"));
        assert!(error("stop pos 0 NaN").contains("finite"));
        assert!(error("stop pos 1 inf").contains("finite"));
        assert!(error("stop wobble 0").contains("unknown stop command"));
        assert!(error("frobnicate").contains("unknown command"));
    }
}
