use evograph::config::ChartConfig;
use evograph::csv_reader;
use evograph::plotter::TemporalPlotter;
use std::collections::HashMap;

/// Check if bytes are a valid PNG
fn is_valid_png(bytes: &[u8]) -> bool {
    bytes.len() > 8 && bytes[0..8] == [137, 80, 78, 71, 13, 10, 26, 10]
}

fn render_csv(csv: &str, config: ChartConfig) -> anyhow::Result<Vec<u8>> {
    let data = csv_reader::read_csv(csv.as_bytes())?;
    let plotter = TemporalPlotter::new(data, config)?;
    plotter.render()
}

#[test]
fn test_end_to_end_default_columns() {
    let csv = "\
Ano,C_IFDM
2019,Alto
2019,Alto
2019,Baixo
2020,Alto
2020,Moderado
2021,Moderado
2021,Alto
";
    let result = render_csv(csv, ChartConfig::default());
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    assert!(is_valid_png(&result.unwrap()), "Output is not a valid PNG");
}

#[test]
fn test_end_to_end_extra_columns_ignored() {
    let csv = "\
Municipio,Ano,C_IFDM,IFDM
Itaguai,2019,Alto,0.81
Itaguai,2020,Alto,0.82
Resende,2020,Baixo,0.40
";
    let result = render_csv(csv, ChartConfig::default());
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    assert!(is_valid_png(&result.unwrap()));
}

#[test]
fn test_end_to_end_custom_columns() {
    let csv = "\
periodo,classe
T1,A
T1,B
T2,A
";
    let config = ChartConfig {
        x_col: "periodo".to_string(),
        hue_col: "classe".to_string(),
        title: "Por trimestre".to_string(),
        ..ChartConfig::default()
    };
    let result = render_csv(csv, config);
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    assert!(is_valid_png(&result.unwrap()));
}

#[test]
fn test_end_to_end_column_not_found() {
    let csv = "Ano,Categoria\n2020,Alto\n";
    let result = render_csv(csv, ChartConfig::default());
    assert!(result.is_err(), "Should have failed with column not found");
    assert!(result.unwrap_err().to_string().contains("not found"));
}

#[test]
fn test_end_to_end_empty_csv() {
    // Header-only input renders the placeholder, not an error.
    let csv = "Ano,C_IFDM\n";
    let result = render_csv(csv, ChartConfig::default());
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    assert!(is_valid_png(&result.unwrap()));
}

#[test]
fn test_end_to_end_partial_palette() {
    let csv = "\
Ano,C_IFDM
2020,Alto
2020,Baixo
2021,Alto
";
    let mut mapping = HashMap::new();
    mapping.insert("Alto".to_string(), "red".to_string());
    let config = ChartConfig {
        palette: Some(mapping),
        ..ChartConfig::default()
    };
    let result = render_csv(csv, config);
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    assert!(is_valid_png(&result.unwrap()));
}

#[test]
fn test_end_to_end_grouping_counts() {
    let csv = "\
Ano,C_IFDM
2020,Alto
2020,Alto
2020,Baixo
2021,Alto
";
    let data = csv_reader::read_csv(csv.as_bytes()).unwrap();
    let plotter = TemporalPlotter::new(data, ChartConfig::default()).unwrap();
    let table = plotter.grouped().unwrap();
    let rows: Vec<(String, String, u64)> = table
        .into_iter()
        .map(|r| (r.x, r.hue, r.count))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("2020".to_string(), "Alto".to_string(), 2),
            ("2020".to_string(), "Baixo".to_string(), 1),
            ("2021".to_string(), "Alto".to_string(), 1),
        ]
    );
}

#[test]
fn test_end_to_end_unicode_categories() {
    let csv = "\
Ano,C_IFDM
2020,Médio
2020,Médio
2021,Crítico
";
    let result = render_csv(csv, ChartConfig::default());
    assert!(result.is_ok(), "Failed: {:?}", result.err());
    assert!(is_valid_png(&result.unwrap()));
}
