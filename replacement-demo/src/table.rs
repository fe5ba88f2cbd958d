//! Renderização do histórico de uma simulação como tabela de texto: uma
//! coluna por acesso, uma linha por frame, mais as linhas de falta de página e
//! de página substituída.

use std::fmt::Write;

use vm::SimulationResult;

fn cell(page: Option<usize>, empty: &str) -> String {
    page.map(|p| p.to_string()).unwrap_or_else(|| empty.to_string())
}

pub fn render_table(result: &SimulationResult) -> String {
    let mut rows: Vec<(String, Vec<String>)> = Vec::new();

    rows.push((
        "acesso".to_string(),
        (1..=result.len()).map(|i| i.to_string()).collect(),
    ));
    rows.push((
        "página".to_string(),
        result.access_sequence.iter().map(|p| p.to_string()).collect(),
    ));

    for frame in result.frames.iter() {
        let idx = frame.frame_number();

        rows.push((
            format!("frame {}", idx + 1),
            result
                .frame_history
                .iter()
                .map(|snapshot| cell(snapshot[idx], ""))
                .collect(),
        ));
    }

    rows.push((
        "falta".to_string(),
        result
            .page_faults
            .iter()
            .map(|&faulted| if faulted { "sim" } else { "não" }.to_string())
            .collect(),
    ));
    rows.push((
        "substituída".to_string(),
        result.replaced_pages.iter().map(|&p| cell(p, "-")).collect(),
    ));

    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let cell_width = rows
        .iter()
        .flat_map(|(_, cells)| cells.iter().map(|c| c.chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();

    for (label, cells) in &rows {
        let _ = write!(out, "{:<width$}", label, width = label_width);

        for c in cells {
            let _ = write!(out, " | {:>width$}", c, width = cell_width);
        }

        out.push('\n');
    }

    let _ = writeln!(
        out,
        "\n{}: {} faltas de página, {} acertos em {} acessos",
        result.policy,
        result.fault_count(),
        result.hit_count(),
        result.len()
    );

    out
}

#[cfg(test)]
mod tests {
    use vm::{run_simulation, ReplacementPolicy, SimulationConfig};

    use super::*;

    #[test]
    fn test_render_table() {
        let config = SimulationConfig::default().with_policy(ReplacementPolicy::Fifo);
        let result = run_simulation(&[1, 2, 1, 3], &config).unwrap();

        let table = render_table(&result);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "acesso      |   1 |   2 |   3 |   4");
        assert_eq!(lines[1], "página      |   1 |   2 |   1 |   3");
        assert_eq!(lines[2], "frame 1     |   1 |   1 |   1 |   3");
        assert_eq!(lines[3], "frame 2     |     |   2 |   2 |   2");
        assert_eq!(lines[4], "falta       | sim | sim | não | sim");
        assert_eq!(lines[5], "substituída |   - |   - |   - |   1");
        assert!(table.ends_with("FIFO: 3 faltas de página, 1 acertos em 4 acessos\n"));
    }

    #[test]
    fn test_render_empty() {
        let result = run_simulation(&[], &SimulationConfig::default()).unwrap();
        let table = render_table(&result);

        assert!(table.contains("frame 2"));
        assert!(table.contains("0 faltas de página"));
    }
}
