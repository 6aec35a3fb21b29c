/// A candidate on a presidential formula, identified by their Hoja de Vida ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateRecord {
    pub partido: &'static str,
    pub persona: &'static str,
    pub candidatura: &'static str,
    pub id_hoja_vida: u32,
}

impl CandidateRecord {
    pub const fn new(
        partido: &'static str,
        persona: &'static str,
        candidatura: &'static str,
        id_hoja_vida: u32,
    ) -> Self {
        Self {
            partido,
            persona,
            candidatura,
            id_hoja_vida,
        }
    }

    /// The Hoja de Vida URL for this candidate, against the endpoint `base`.
    pub fn url(&self, base: &str) -> String {
        format!("{base}?idHojaVida={}", self.id_hoja_vida)
    }
}

/// Presidential formulas for the 2026 general election: president, then first & second
/// vice-president, per party.
pub static CANDIDATES: &[CandidateRecord] = &[
    CandidateRecord::new("FUERZA POPULAR", "Keiko Fujimori", "Presidente", 245741),
    CandidateRecord::new("FUERZA POPULAR", "Luis Galarreta", "1er Vicepresidente", 246699),
    CandidateRecord::new("FUERZA POPULAR", "Miguel Torres", "2do Vicepresidente", 251995),

    CandidateRecord::new("RENOVACION POPULAR", "Rafael Lopez", "Presidente", 245620),
    CandidateRecord::new("RENOVACION POPULAR", "Norma Yarrow", "1er Vicepresidente", 251570),
    CandidateRecord::new("RENOVACION POPULAR", "Jhon Ramos", "2do Vicepresidente", 246127),

    CandidateRecord::new("PARTIDO POLITICO COOPERACION POPULAR", "Yonhy Lescano", "Presidente", 245572),
    CandidateRecord::new("PARTIDO POLITICO COOPERACION POPULAR", "Carmela Salazar", "1er Vicepresidente", 243645),
    CandidateRecord::new("PARTIDO POLITICO COOPERACION POPULAR", "Vanessa Lazo", "2do Vicepresidente", 246583),

    CandidateRecord::new("PARTIDO PAIS PARA TODOS", "Carlos Alvarez", "Presidente", 247143),
    CandidateRecord::new("PARTIDO PAIS PARA TODOS", "Maria Chambizea", "1er Vicepresidente", 248698),
    CandidateRecord::new("PARTIDO PAIS PARA TODOS", "Diego Guevara", "2do Vicepresidente", 248124),

    CandidateRecord::new("ALIANZA PARA EL PROGRESO", "Cesar Acuña", "Presidente", 245682),
    CandidateRecord::new("ALIANZA PARA EL PROGRESO", "Jessica Tumi", "1er Vicepresidente", 246620),
    CandidateRecord::new("ALIANZA PARA EL PROGRESO", "Alejandro Soto", "2do Vicepresidente", 246179),

    CandidateRecord::new("AHORA NACION - AN", "Alfonso Lopez Chau", "Presidente", 248006),
    CandidateRecord::new("AHORA NACION - AN", "Luis Villanueva", "1er Vicepresidente", 244896),
    CandidateRecord::new("AHORA NACION - AN", "Ruth Buendia", "2do Vicepresidente", 244518),

    CandidateRecord::new("PARTIDO CIVICO OBRAS", "Ricardo Belmont", "Presidente", 251773),
    CandidateRecord::new("PARTIDO CIVICO OBRAS", "Daniel Barragan", "1er Vicepresidente", 251521),
    CandidateRecord::new("PARTIDO CIVICO OBRAS", "Dina Hancco", "2do Vicepresidente", 243959),

    CandidateRecord::new("PARTIDO POLITICO NACIONAL PERU LIBRE", "Vladimir Cerron", "Presidente", 244668),
    CandidateRecord::new("PARTIDO POLITICO NACIONAL PERU LIBRE", "Flavio Cruz", "1er Vicepresidente", 252233),
    CandidateRecord::new("PARTIDO POLITICO NACIONAL PERU LIBRE", "Bertha Rojas", "2do Vicepresidente", 252374),

    CandidateRecord::new("PARTIDO FRENTE DE LA ESPERANZA 2021", "Fernando Olivera", "Presidente", 252450),
    CandidateRecord::new("PARTIDO FRENTE DE LA ESPERANZA 2021", "Elizabeth Leon", "1er Vicepresidente", 252087),
    CandidateRecord::new("PARTIDO FRENTE DE LA ESPERANZA 2021", "Carlos Cuaresma", "2do Vicepresidente", 243625),

    CandidateRecord::new("JUNTOS POR EL PERU", "Roberto Sanchez", "Presidente", 246281),
    CandidateRecord::new("JUNTOS POR EL PERU", "Anali Marquez", "1er Vicepresidente", 245814),
    CandidateRecord::new("JUNTOS POR EL PERU", "Brigida Curo", "2do Vicepresidente", 252388),

    CandidateRecord::new("PARTIDO MORADO", "Mesias Guevara", "Presidente", 246025),
    CandidateRecord::new("PARTIDO MORADO", "Heber Cueva", "1er Vicepresidente", 252805),
    CandidateRecord::new("PARTIDO MORADO", "Marisol Liñan", "2do Vicepresidente", 252097),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_the_hoja_de_vida_id() {
        let keiko = CANDIDATES[0];
        assert_eq!(
            keiko.url("https://example.test/hoja-vida"),
            "https://example.test/hoja-vida?idHojaVida=245741"
        );
    }

    #[test]
    fn every_party_has_a_full_formula() {
        assert_eq!(CANDIDATES.len(), 33);
        for formula in CANDIDATES.chunks(3) {
            assert!(formula.iter().all(|c| c.partido == formula[0].partido));
            assert_eq!(formula[0].candidatura, "Presidente");
            assert_eq!(formula[1].candidatura, "1er Vicepresidente");
            assert_eq!(formula[2].candidatura, "2do Vicepresidente");
        }
    }
}
