//! Main application state and UI

use eframe::egui;
use log::{info, warn};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use bioseqenzer::analysis::{
    analyze_record, count_non_standard, parse_sequence_text, read_sequence_file, AnalysisParams,
    Motif, SequenceRecord, SequenceReport,
};

/// Bases shown per line in the sequence preview
const BASES_PER_LINE: usize = 60;

/// Application state
pub struct BioSeqenzerApp {
    // Input tab state
    sequence_input: String,
    records: Vec<SequenceRecord>,
    selected_record: usize,
    input_error: Option<String>,

    // Analysis parameters
    params: AnalysisParams,

    // Analysis state
    is_analyzing: bool,
    results_rx: Option<Receiver<SequenceReport>>,

    // Results state
    report: Option<SequenceReport>,
    selected_motif: Option<Motif>,

    // View state
    current_tab: Tab,

    // Save/Load
    save_error: Option<String>,
    load_error: Option<String>,

    // Deferred actions
    pending_save: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Input,
    Settings,
    Results,
}

impl Default for BioSeqenzerApp {
    fn default() -> Self {
        Self {
            sequence_input: String::new(),
            records: Vec::new(),
            selected_record: 0,
            input_error: None,
            params: AnalysisParams::default(),
            is_analyzing: false,
            results_rx: None,
            report: None,
            selected_motif: None,
            current_tab: Tab::Input,
            save_error: None,
            load_error: None,
            pending_save: false,
        }
    }
}

impl BioSeqenzerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn parse_sequence_input(&mut self) {
        self.input_error = None;
        self.records.clear();
        self.selected_record = 0;

        if self.sequence_input.trim().is_empty() {
            return;
        }

        match parse_sequence_text(&self.sequence_input) {
            Ok(records) => {
                self.records = records;
            }
            Err(e) => {
                self.input_error = Some(e.to_string());
            }
        }
    }

    /// The record to analyze; an empty record falls back to the default sequence
    fn current_record(&self) -> SequenceRecord {
        self.records
            .get(self.selected_record)
            .cloned()
            .unwrap_or_else(|| SequenceRecord {
                name: "Default".to_string(),
                sequence: String::new(),
            })
    }

    fn start_analysis(&mut self) {
        let record = self.current_record();
        let params = self.params.clone();

        let (results_tx, results_rx) = channel();
        self.results_rx = Some(results_rx);
        self.is_analyzing = true;

        thread::spawn(move || {
            let report = analyze_record(&record, &params);
            let _ = results_tx.send(report);
        });
    }

    fn check_analysis_progress(&mut self) {
        if let Some(rx) = &self.results_rx {
            if let Ok(report) = rx.try_recv() {
                self.report = Some(report);
                self.selected_motif = None;
                self.is_analyzing = false;
                self.results_rx = None;
                self.current_tab = Tab::Results;
            }
        }
    }

    fn save_report(&mut self) {
        let Some(report) = &self.report else {
            self.save_error = Some("No report to save".to_string());
            return;
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("sequence_report.json")
            .save_file()
        {
            match serde_json::to_string_pretty(report) {
                Ok(json) => {
                    if let Err(e) = std::fs::write(&path, json) {
                        warn!("Failed to write {}: {}", path.display(), e);
                        self.save_error = Some(format!("Failed to write file: {}", e));
                    } else {
                        info!("Saved report to {}", path.display());
                        self.save_error = None;
                    }
                }
                Err(e) => {
                    self.save_error = Some(format!("Failed to serialize: {}", e));
                }
            }
        }
    }

    fn load_report(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            match std::fs::read_to_string(&path) {
                Ok(json) => match serde_json::from_str::<SequenceReport>(&json) {
                    Ok(report) => {
                        info!("Loaded report {} from {}", report.name, path.display());
                        self.params = report.params.clone();
                        self.report = Some(report);
                        self.selected_motif = None;
                        self.load_error = None;
                        self.current_tab = Tab::Results;
                    }
                    Err(e) => {
                        self.load_error = Some(format!("Failed to parse: {}", e));
                    }
                },
                Err(e) => {
                    self.load_error = Some(format!("Failed to read file: {}", e));
                }
            }
        }
    }

    fn load_sequence_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("FASTA", &["fasta", "fa", "fna", "fas", "txt"])
            .pick_file()
        {
            match read_sequence_file(&path) {
                Ok(records) => {
                    info!("Loaded {} sequence(s) from {}", records.len(), path.display());
                    self.sequence_input = records
                        .iter()
                        .map(|r| format!(">{}\n{}\n", r.name, r.sequence))
                        .collect();
                    self.records = records;
                    self.selected_record = 0;
                    self.input_error = None;
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", path.display(), e);
                    self.input_error = Some(format!("Failed to read file: {}", e));
                }
            }
        }
    }
}

impl eframe::App for BioSeqenzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_analyzing {
            self.check_analysis_progress();
            ctx.request_repaint();
        }

        if self.pending_save {
            self.pending_save = false;
            self.save_report();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load Sequence...").clicked() {
                        self.load_sequence_file();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Load Report...").clicked() {
                        self.load_report();
                        ui.close_menu();
                    }
                    if ui.button("Save Report...").clicked() {
                        self.save_report();
                        ui.close_menu();
                    }
                });
            });
        });

        // Title and tab bar
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("BioSeqenzer")
                        .strong()
                        .color(egui::Color32::from_rgb(100, 200, 100)),
                );
                ui.separator();
                ui.selectable_value(&mut self.current_tab, Tab::Input, "Sequence Input");
                ui.selectable_value(&mut self.current_tab, Tab::Settings, "Settings");
                ui.selectable_value(&mut self.current_tab, Tab::Results, "Results");
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_analyzing {
                    ui.spinner();
                    ui.label("Analyzing...");
                } else if let Some(ref report) = self.report {
                    ui.label(format!(
                        "Report: {} ({} bp), {} motif hits, {} failed step(s)",
                        report.name,
                        report.sequence_length(),
                        report.motifs.total_hits(),
                        report.failure_count()
                    ));
                } else if self.records.is_empty() {
                    ui.label(format!(
                        "No sequence loaded; the default {} will be analyzed",
                        self.params.default_sequence
                    ));
                } else {
                    ui.label(format!("{} sequence(s) loaded", self.records.len()));
                }
            });
        });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Input => self.show_input_tab(ui),
            Tab::Settings => self.show_settings_tab(ui),
            Tab::Results => self.show_results_tab(ui),
        });
    }
}

impl BioSeqenzerApp {
    fn show_input_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Sequence Input");
        ui.separator();

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Genomic Sequence");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Clear").clicked() {
                        self.sequence_input.clear();
                        self.records.clear();
                        self.selected_record = 0;
                        self.input_error = None;
                    }
                    if ui.button("Load File").clicked() {
                        self.load_sequence_file();
                    }
                    if ui.button("Load Example").clicked() {
                        self.sequence_input = EXAMPLE_SEQUENCE.to_string();
                        self.parse_sequence_input();
                    }
                });
            });

            ui.label("FASTA or raw sequence (whitespace is ignored, input is uppercased):");

            egui::ScrollArea::vertical()
                .id_salt("sequence_scroll")
                .max_height((ui.available_height() - 80.0).max(120.0))
                .show(ui, |ui| {
                    let response = ui.add(
                        egui::TextEdit::multiline(&mut self.sequence_input)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .desired_rows(12),
                    );
                    if response.changed() {
                        self.parse_sequence_input();
                    }
                });

            if let Some(ref error) = self.input_error {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", error));
            }

            if self.records.len() > 1 {
                let selected_name = self.records[self.selected_record.min(self.records.len() - 1)]
                    .name
                    .clone();
                ui.horizontal(|ui| {
                    ui.label("Record:");
                    egui::ComboBox::from_id_salt("record_select")
                        .selected_text(selected_name)
                        .show_ui(ui, |ui| {
                            for (i, record) in self.records.iter().enumerate() {
                                ui.selectable_value(&mut self.selected_record, i, record.name.as_str());
                            }
                        });
                });
            }

            if let Some(record) = self.records.get(self.selected_record) {
                ui.colored_label(
                    egui::Color32::from_rgb(100, 200, 100),
                    format!("{} ({} bp)", record.name, record.sequence.chars().count()),
                );
                let non_standard = count_non_standard(&record.sequence);
                if non_standard > 0 {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!(
                            "Warning: {} character(s) outside A, C, G, T; motifs will skip them \
                             and translation or primer design may fail",
                            non_standard
                        ),
                    );
                }
            }
        });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.is_analyzing, egui::Button::new("Run Analysis"))
                .clicked()
            {
                self.start_analysis();
            }
            if self.is_analyzing {
                ui.spinner();
            }
        });
    }

    fn show_settings_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Settings");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.group(|ui| {
                ui.heading("Primer Design");

                ui.horizontal(|ui| {
                    ui.label("Forward adapter (5'):");
                    ui.text_edit_singleline(&mut self.params.primers.forward_adapter);
                });
                ui.horizontal(|ui| {
                    ui.label("Reverse adapter (5'):");
                    ui.text_edit_singleline(&mut self.params.primers.reverse_adapter);
                });
                ui.horizontal(|ui| {
                    ui.label("Annealing length (bases):");
                    ui.add(
                        egui::DragValue::new(&mut self.params.primers.annealing_length)
                            .range(1..=60),
                    );
                });
                ui.label("Defaults: NdeI (CATATG) forward, XhoI (CTCGAG) reverse, 20 bases.");
            });

            ui.add_space(10.0);

            ui.group(|ui| {
                ui.heading("Default Sequence");
                ui.label("Analyzed when no sequence is entered:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.params.default_sequence)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
            });

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                if ui.button("Reset to Defaults").clicked() {
                    self.params = AnalysisParams::default();
                }
                if ui
                    .add_enabled(!self.is_analyzing, egui::Button::new("Run Analysis"))
                    .clicked()
                {
                    self.start_analysis();
                }
            });
        });
    }

    fn show_results_tab(&mut self, ui: &mut egui::Ui) {
        let Some(report) = self.report.clone() else {
            ui.heading("Results");
            ui.separator();
            ui.label("No results yet. Run an analysis from the Sequence Input tab.");
            return;
        };

        ui.horizontal(|ui| {
            ui.heading(format!("Results: {}", report.name));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save Report").clicked() {
                    self.pending_save = true;
                }
                if ui.button("Copy as Text").clicked() {
                    ui.ctx().copy_text(report.to_string());
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.group(|ui| {
                ui.heading("Motifs");
                ui.label("Click a motif to highlight its hits in the sequence.");
                egui::Grid::new("motif_grid")
                    .striped(true)
                    .num_columns(3)
                    .show(ui, |ui| {
                        ui.strong("Motif");
                        ui.strong("Hits");
                        ui.strong("Positions (0-based)");
                        ui.end_row();

                        for hits in report.motifs.iter() {
                            let selected = self.selected_motif == Some(hits.motif);
                            if ui.selectable_label(selected, hits.motif.label()).clicked() {
                                self.selected_motif = if selected { None } else { Some(hits.motif) };
                            }
                            ui.label(hits.positions.len().to_string());
                            ui.label(format_positions(&hits.positions));
                            ui.end_row();
                        }
                    });
            });

            ui.add_space(5.0);

            ui.group(|ui| {
                ui.heading("Translation");
                match &report.protein {
                    Ok(protein) if protein.is_empty() => {
                        ui.label("Protein: (empty, stop codon in first position)");
                    }
                    Ok(protein) => {
                        ui.label(format!("Protein ({} aa):", protein.chars().count()));
                        ui.add(
                            egui::Label::new(egui::RichText::new(protein).monospace()).wrap(),
                        );
                    }
                    Err(e) => {
                        ui.colored_label(egui::Color32::RED, format!("Translation failed: {}", e));
                    }
                }
                match &report.molecular_weight {
                    Ok(mw) => {
                        ui.label(format!("Molecular weight: {:.2} Da", mw));
                    }
                    Err(e) => {
                        ui.colored_label(egui::Color32::YELLOW, format!("Molecular weight: {}", e));
                    }
                }
            });

            ui.add_space(5.0);

            ui.group(|ui| {
                ui.heading("Primer Design");
                match &report.primers {
                    Ok(pair) => {
                        let params = &report.params.primers;
                        primer_row(ui, "Forward", &params.forward_adapter, pair.forward_annealing(params));
                        primer_row(ui, "Reverse", &params.reverse_adapter, pair.reverse_annealing(params));
                    }
                    Err(e) => {
                        ui.colored_label(egui::Color32::RED, format!("Primer design failed: {}", e));
                    }
                }
            });

            ui.add_space(5.0);

            ui.group(|ui| {
                ui.heading(format!("Sequence ({} bp)", report.sequence_length()));
                self.show_sequence_preview(ui, &report);
            });

            if let Some(ref error) = self.save_error {
                ui.colored_label(egui::Color32::RED, error);
            }
            if let Some(ref error) = self.load_error {
                ui.colored_label(egui::Color32::RED, error);
            }
        });
    }

    fn show_sequence_preview(&self, ui: &mut egui::Ui, report: &SequenceReport) {
        let bases: Vec<char> = report.sequence.chars().collect();

        let mut highlighted = vec![false; bases.len()];
        if let Some(motif) = self.selected_motif {
            let len = motif.pattern_len();
            for &pos in report.motifs.get(motif) {
                for flag in highlighted.iter_mut().skip(pos).take(len) {
                    *flag = true;
                }
            }
        }

        let font = egui::FontId::monospace(13.0);
        for (line_idx, chunk) in bases.chunks(BASES_PER_LINE).enumerate() {
            let offset = line_idx * BASES_PER_LINE;
            let mut job = egui::text::LayoutJob::default();
            job.append(
                &format!("{:>8}  ", offset),
                0.0,
                egui::TextFormat {
                    font_id: font.clone(),
                    color: egui::Color32::GRAY,
                    ..Default::default()
                },
            );
            for (i, &base) in chunk.iter().enumerate() {
                let background = if highlighted[offset + i] {
                    egui::Color32::from_rgb(70, 70, 140)
                } else {
                    egui::Color32::TRANSPARENT
                };
                job.append(
                    &base.to_string(),
                    0.0,
                    egui::TextFormat {
                        font_id: font.clone(),
                        color: base_color(base),
                        background,
                        ..Default::default()
                    },
                );
            }
            ui.label(job);
        }
    }
}

fn primer_row(ui: &mut egui::Ui, label: &str, adapter: &str, annealing: &str) {
    ui.horizontal(|ui| {
        ui.label(format!("{} primer:", label));
        ui.label(
            egui::RichText::new(adapter)
                .monospace()
                .color(egui::Color32::from_rgb(255, 200, 60)),
        );
        ui.label(egui::RichText::new(annealing).monospace());
        ui.label(format!("({} nt)", adapter.len() + annealing.len()));
    });
}

fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        return "-".to_string();
    }
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Color for DNA base letters in the sequence display
fn base_color(base: char) -> egui::Color32 {
    match base {
        'A' => egui::Color32::from_rgb(100, 200, 100), // Green
        'T' => egui::Color32::from_rgb(220, 80, 80),   // Red
        'G' => egui::Color32::from_rgb(255, 200, 60),  // Yellow/gold
        'C' => egui::Color32::from_rgb(100, 150, 255), // Blue
        _ => egui::Color32::GRAY,
    }
}

const EXAMPLE_SEQUENCE: &str = r#">Example promoter and ORF
GGGCGGCCAATCTATAAAAGGCAGCATGGCCAAGTACGAGTGGCTGAAGGTGTAG
CTTTCCAGAATAAAGCTTTGCGTAA
"#;
