/// A party and the ID of its ballot symbol on the JNE registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartySymbolEntry {
    pub partido: &'static str,

    /// `None` while the symbol ID has not been found yet.
    pub id_simbolo: Option<u32>,

    /// Simplified file name, without extension.
    pub stem: &'static str,
}

impl PartySymbolEntry {
    pub const fn new(partido: &'static str, id_simbolo: u32, stem: &'static str) -> Self {
        Self {
            partido,
            id_simbolo: Some(id_simbolo),
            stem,
        }
    }

    /// File stem, falling back to the lowercased party name when none was configured.
    pub fn file_stem(&self) -> String {
        if self.stem.is_empty() {
            simplify(self.partido)
        } else {
            self.stem.to_string()
        }
    }
}

/// URL of symbol `id` on the endpoint `base`.
pub fn symbol_url(base: &str, id: u32) -> String {
    format!("{}/{id}", base.trim_end_matches('/'))
}

/// Lowercase `partido`, replacing spaces with underscores.
pub fn simplify(partido: &str) -> String {
    partido.to_lowercase().replace(' ', "_")
}

/// Official symbol IDs from votoinformado.jne.gob.pe, as of 14 January 2026.
pub static PARTY_SYMBOLS: &[PartySymbolEntry] = &[
    PartySymbolEntry::new("FUERZA POPULAR", 1366, "fuerza_popular"),
    PartySymbolEntry::new("RENOVACION POPULAR", 22, "renovacion_popular"),
    PartySymbolEntry::new("PARTIDO POLITICO COOPERACION POPULAR", 2995, "cooperacion_popular"),
    PartySymbolEntry::new("PARTIDO PAIS PARA TODOS", 2956, "pais_para_todos"),
    PartySymbolEntry::new("ALIANZA PARA EL PROGRESO", 1257, "alianza_progreso"),
    PartySymbolEntry::new("AHORA NACION - AN", 2980, "ahora_nacion"),
    PartySymbolEntry::new("PARTIDO CIVICO OBRAS", 2941, "obras"),
    PartySymbolEntry::new("PARTIDO POLITICO NACIONAL PERU LIBRE", 2218, "peru_libre"),
    PartySymbolEntry::new("PARTIDO FRENTE DE LA ESPERANZA 2021", 2857, "frente_esperanza"),
    PartySymbolEntry::new("JUNTOS POR EL PERU", 1264, "juntos_peru"),
    PartySymbolEntry::new("PARTIDO MORADO", 2840, "morado"),
];
