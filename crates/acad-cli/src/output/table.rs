//! Plain aligned tables. Widths count chars, so accented names line up.

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| width_of(cell))
                .chain([width_of(header), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let header_line = join_cells(headers.iter().copied(), &widths, |text, width| {
        pad(&clip(text, width), width, false)
    });
    let divider = "-".repeat(width_of(&header_line));

    let mut lines = vec![header_line, divider];
    for row in rows {
        let cells = (0..widths.len()).map(|index| row.get(index).map_or("-", String::as_str));
        lines.push(join_cells(cells, &widths, |text, width| {
            let clipped = clip(text, width);
            let right = is_numeric(&clipped);
            let padded = pad(&clipped, width, right);
            if options.color {
                highlight(&clipped, padded)
            } else {
                padded
            }
        }));
    }
    lines.join("\n")
}

fn join_cells<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    format: impl Fn(&str, usize) -> String,
) -> String {
    cells
        .zip(widths)
        .map(|(text, width)| format(text, *width))
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

/// Narrow the widest column one char at a time until the row fits or no
/// column can shrink further.
fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let total = |widths: &[usize]| widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    while total(widths) > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > width_of(headers[*index]).max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn width_of(text: &str) -> usize {
    text.chars().count()
}

fn clip(text: &str, width: usize) -> String {
    if width_of(text) <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn pad(text: &str, width: usize, right: bool) -> String {
    if right {
        format!("{text:>width$}")
    } else {
        format!("{text:<width$}")
    }
}

fn is_numeric(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
}

/// Color program status and success flags.
fn highlight(plain: &str, padded: String) -> String {
    let code = match plain.to_lowercase().as_str() {
        "activo" | "true" => "32",
        "inactivo" | "false" => "31",
        _ => return padded,
    };
    padded.replacen(plain, &format!("\u{1b}[{code}m{plain}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn accented_cells_align() {
        let rows = vec![
            vec!["Medellín".to_string(), "12".to_string()],
            vec!["Cali".to_string(), "8".to_string()],
        ];
        let table = render_table(&["ciudad", "total"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "ciudad    total");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "Medellín      12");
        assert_eq!(lines[3], "Cali           8");
    }

    #[test]
    fn long_cells_are_clipped_to_width() {
        let rows = vec![vec![
            "Institución Universitaria Pascual Bravo".to_string(),
            "Presencial".to_string(),
        ]];
        let options = TableOptions {
            max_width: Some(30),
            color: false,
        };
        let table = render_table(&["nombre", "modalidad"], &rows, options);

        for line in table.lines() {
            assert!(line.chars().count() <= 30, "{line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn missing_cells_render_dash() {
        let rows = vec![vec!["p1".to_string()]];
        let table = render_table(&["id", "estado"], &rows, PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with('-')));
    }

    #[test]
    fn status_is_colored_when_enabled() {
        let rows = vec![vec!["Activo".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_table(&["estado"], &rows, options);
        assert!(table.contains("\u{1b}[32mActivo\u{1b}[0m"));
    }
}
