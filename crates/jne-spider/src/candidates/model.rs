use std::collections::BTreeMap;
use std::fmt;

/// Output columns of the candidate spreadsheet.
///
/// Declaration order is the preferred column order; `Ord` is derived from it, so a
/// [`CandidateProfile`] iterates its cells in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Partido,
    Candidatura,
    Persona,
    Nombres,
    ApellidoPaterno,
    ApellidoMaterno,
    Dni,
    Sexo,
    FechaNacimiento,
    LugarNacimiento,
    Domicilio,
    EstadoCandidatura,
    EducacionUniversitaria,
    Posgrados,
    ExperienciaLaboral,
    CargosPartidarios,
    CargosEleccionPrevios,
    TieneSentenciasPenales,
    NumSentenciasPenales,
    DetalleSentenciasPenales,
    TieneSentenciasCiviles,
    NumSentenciasCiviles,
    AnioIngresos,
    IngresoTotal,
    IngresoPublico,
    IngresoPrivado,
    NumBienesInmuebles,
    ValorTotalInmuebles,
    NumVehiculos,
    ValorTotalVehiculos,
    IdHojaVida,
}

impl Column {
    pub const ALL: [Column; 31] = [
        Column::Partido,
        Column::Candidatura,
        Column::Persona,
        Column::Nombres,
        Column::ApellidoPaterno,
        Column::ApellidoMaterno,
        Column::Dni,
        Column::Sexo,
        Column::FechaNacimiento,
        Column::LugarNacimiento,
        Column::Domicilio,
        Column::EstadoCandidatura,
        Column::EducacionUniversitaria,
        Column::Posgrados,
        Column::ExperienciaLaboral,
        Column::CargosPartidarios,
        Column::CargosEleccionPrevios,
        Column::TieneSentenciasPenales,
        Column::NumSentenciasPenales,
        Column::DetalleSentenciasPenales,
        Column::TieneSentenciasCiviles,
        Column::NumSentenciasCiviles,
        Column::AnioIngresos,
        Column::IngresoTotal,
        Column::IngresoPublico,
        Column::IngresoPrivado,
        Column::NumBienesInmuebles,
        Column::ValorTotalInmuebles,
        Column::NumVehiculos,
        Column::ValorTotalVehiculos,
        Column::IdHojaVida,
    ];

    /// Header text, as written to the spreadsheet.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Partido => "Partido",
            Column::Candidatura => "Candidatura",
            Column::Persona => "Persona",
            Column::Nombres => "nombres",
            Column::ApellidoPaterno => "apellido_paterno",
            Column::ApellidoMaterno => "apellido_materno",
            Column::Dni => "dni",
            Column::Sexo => "sexo",
            Column::FechaNacimiento => "fecha_nacimiento",
            Column::LugarNacimiento => "lugar_nacimiento",
            Column::Domicilio => "domicilio",
            Column::EstadoCandidatura => "estado_candidatura",
            Column::EducacionUniversitaria => "educacion_universitaria",
            Column::Posgrados => "posgrados",
            Column::ExperienciaLaboral => "experiencia_laboral",
            Column::CargosPartidarios => "cargos_partidarios",
            Column::CargosEleccionPrevios => "cargos_eleccion_previos",
            Column::TieneSentenciasPenales => "tiene_sentencias_penales",
            Column::NumSentenciasPenales => "num_sentencias_penales",
            Column::DetalleSentenciasPenales => "detalle_sentencias_penales",
            Column::TieneSentenciasCiviles => "tiene_sentencias_civiles",
            Column::NumSentenciasCiviles => "num_sentencias_civiles",
            Column::AnioIngresos => "año_ingresos",
            Column::IngresoTotal => "ingreso_total",
            Column::IngresoPublico => "ingreso_publico",
            Column::IngresoPrivado => "ingreso_privado",
            Column::NumBienesInmuebles => "num_bienes_inmuebles",
            Column::ValorTotalInmuebles => "valor_total_inmuebles",
            Column::NumVehiculos => "num_vehiculos",
            Column::ValorTotalVehiculos => "valor_total_vehiculos",
            Column::IdHojaVida => "ID_HojaVida",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A single spreadsheet value.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Number(f64),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Int(n) => write!(f, "{n}"),
            Cell::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self {
        Cell::Int(n as i64)
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        Cell::Int(i64::from(n))
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// One flattened Hoja de Vida: the cells present for a candidate, keyed by column.
///
/// Columns the source document never mentioned are absent rather than empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateProfile(BTreeMap<Column, Cell>);

impl CandidateProfile {
    pub fn get(&self, column: Column) -> Option<&Cell> {
        self.0.get(&column)
    }

    pub fn contains(&self, column: Column) -> bool {
        self.0.contains_key(&column)
    }

    /// Cells in output column order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &Cell)> {
        self.0.iter().map(|(column, cell)| (*column, cell))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn set(&mut self, column: Column, cell: impl Into<Cell>) {
        self.0.insert(column, cell.into());
    }
}
