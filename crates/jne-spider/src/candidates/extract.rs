use super::model::{CandidateProfile, Column};
use super::sources::CandidateRecord;
use serde_json::Value;

/// Separator between the items of a flattened list.
pub const SEPARATOR: &str = " | ";

/// Work history entries kept per candidate.
pub const MAX_WORK_HISTORY: usize = 5;

/// Flatten a Hoja de Vida document into a [`CandidateProfile`].
///
/// Infallible: missing sections, null values & unexpected types all fall back to empty
/// strings or zero. A `null` (or non-object) document produces an empty profile.
pub fn extract(document: &Value) -> CandidateProfile {
    let mut profile = CandidateProfile::default();
    if !document.is_object() {
        return profile;
    }

    general(document, &mut profile);
    education(document, &mut profile);
    career(document, &mut profile);
    judgments(document, &mut profile);
    declarations(document, &mut profile);

    profile
}

/// A full spreadsheet row: the candidate's source columns followed by whatever
/// [`extract`] finds in `document`.
pub fn row(candidate: &CandidateRecord, document: &Value) -> CandidateProfile {
    let mut profile = extract(document);
    profile.set(Column::Partido, candidate.partido);
    profile.set(Column::Persona, candidate.persona);
    profile.set(Column::Candidatura, candidate.candidatura);
    profile.set(Column::IdHojaVida, candidate.id_hoja_vida);
    profile
}

// sections
// ----------------------------------------------------------------------------

fn general(document: &Value, profile: &mut CandidateProfile) {
    let dato = match document.get("datoGeneral").and_then(Value::as_object) {
        Some(map) if !map.is_empty() => &document["datoGeneral"],
        _ => return,
    };

    profile.set(Column::Nombres, text(dato, "nombres"));
    profile.set(Column::ApellidoPaterno, text(dato, "apellidoPaterno"));
    profile.set(Column::ApellidoMaterno, text(dato, "apellidoMaterno"));
    profile.set(Column::Dni, text(dato, "numeroDocumento"));
    profile.set(
        Column::Sexo,
        match text(dato, "sexo").as_str() {
            "1" => "MASCULINO",
            "2" => "FEMENINO",
            _ => "",
        },
    );
    profile.set(Column::FechaNacimiento, text(dato, "feNacimiento"));
    profile.set(
        Column::LugarNacimiento,
        format!(
            "{} - {} - {}",
            text(dato, "naciDistrito"),
            text(dato, "naciProvincia"),
            text(dato, "naciDepartamento")
        ),
    );
    profile.set(
        Column::Domicilio,
        format!(
            "{} - {} - {}",
            text(dato, "domiDistrito"),
            text(dato, "domiProvincia"),
            text(dato, "domiDepartamento")
        ),
    );
    profile.set(Column::EstadoCandidatura, text(dato, "estado"));
}

fn education(document: &Value, profile: &mut CandidateProfile) {
    let university = join(list(document, "/formacionAcademica/educacionUniversitaria"), |edu| {
        let status = match text(edu, "concluidoEduUni").as_str() {
            "SI" => "Concluido",
            _ => "En curso",
        };
        format!(
            "{} - {} ({status})",
            text(edu, "universidad"),
            text(edu, "carreraUni")
        )
    });
    profile.set(Column::EducacionUniversitaria, university);

    let postgraduate = join(list(document, "/formacionAcademica/educacionPosgrado"), |pg| {
        format!(
            "{} - {}",
            text(pg, "txCenEstudioPosgrado"),
            text(pg, "txEspecialidadPosgrado")
        )
    });
    profile.set(Column::Posgrados, postgraduate);
}

fn career(document: &Value, profile: &mut CandidateProfile) {
    let work = list(document, "/experienciaLaboral");
    let work = &work[..work.len().min(MAX_WORK_HISTORY)];
    let work = join(work, |job| {
        format!(
            "{} en {} ({}-{})",
            text(job, "ocupacionProfesion"),
            text(job, "centroTrabajo"),
            text(job, "anioTrabajoDesde"),
            text(job, "anioTrabajoHasta")
        )
    });
    profile.set(Column::ExperienciaLaboral, work);

    let party = join(list(document, "/trayectoria/cargoPartidario"), |cargo| {
        format!(
            "{} en {} ({}-{})",
            text(cargo, "cargoPartidario"),
            text(cargo, "orgPolCargoPartidario"),
            text(cargo, "anioCargoPartiDesde"),
            text(cargo, "anioCargoPartiHasta")
        )
    });
    profile.set(Column::CargosPartidarios, party);

    let elected = join(list(document, "/trayectoria/cargoEleccion"), |cargo| {
        format!(
            "{} por {} ({}-{})",
            text(cargo, "cargoEleccion"),
            text(cargo, "orgPolCargoElec"),
            text(cargo, "anioCargoElecDesde"),
            text(cargo, "anioCargoElecHasta")
        )
    });
    profile.set(Column::CargosEleccionPrevios, elected);
}

fn judgments(document: &Value, profile: &mut CandidateProfile) {
    let penal = list(document, "/sentenciaPenal");
    profile.set(Column::TieneSentenciasPenales, flag(penal));
    profile.set(Column::NumSentenciasPenales, penal.len());
    profile.set(
        Column::DetalleSentenciasPenales,
        join(penal, |sentence| {
            format!("{} - {}", text(sentence, "delito"), text(sentence, "fallo"))
        }),
    );

    let civil = list(document, "/sentenciaObliga");
    profile.set(Column::TieneSentenciasCiviles, flag(civil));
    profile.set(Column::NumSentenciasCiviles, civil.len());
}

fn declarations(document: &Value, profile: &mut CandidateProfile) {
    // the first income entry is the most recent declaration
    match list(document, "/declaracionJurada/ingreso").first() {
        Some(income) => {
            profile.set(Column::AnioIngresos, text(income, "anioIngresos"));
            profile.set(Column::IngresoTotal, number(income, "totalIngresos"));
            profile.set(Column::IngresoPublico, number(income, "remuBrutaPublico"));
            profile.set(Column::IngresoPrivado, number(income, "remuBrutaPrivado"));
        }
        None => {
            profile.set(Column::AnioIngresos, "");
            profile.set(Column::IngresoTotal, 0.0);
            profile.set(Column::IngresoPublico, 0.0);
            profile.set(Column::IngresoPrivado, 0.0);
        }
    }

    let real_estate = list(document, "/declaracionJurada/bienInmueble");
    profile.set(Column::NumBienesInmuebles, real_estate.len());
    profile.set(Column::ValorTotalInmuebles, sum(real_estate, "autoavaluo"));

    let vehicles = list(document, "/declaracionJurada/bienMueble");
    profile.set(Column::NumVehiculos, vehicles.len());
    profile.set(Column::ValorTotalVehiculos, sum(vehicles, "valor"));
}

// helpers
// ----------------------------------------------------------------------------

/// String value of `key`; numbers & booleans are rendered, anything else is empty.
fn text(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Numeric value of `key`, accepting numbers & numeric strings; zero otherwise.
fn number(value: &Value, key: &str) -> f64 {
    let n = match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn sum(items: &[Value], key: &str) -> f64 {
    items.iter().map(|item| number(item, key)).sum()
}

/// The array at JSON `pointer`, or an empty slice when absent or not an array.
fn list<'a>(document: &'a Value, pointer: &str) -> &'a [Value] {
    document
        .pointer(pointer)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn join(items: &[Value], template: impl Fn(&Value) -> String) -> String {
    items
        .iter()
        .map(template)
        .collect::<Vec<String>>()
        .join(SEPARATOR)
}

fn flag(items: &[Value]) -> &'static str {
    if items.is_empty() {
        "NO"
    } else {
        "SÍ"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::model::Cell;
    use serde_json::json;

    fn cell(profile: &CandidateProfile, column: Column) -> String {
        profile
            .get(column)
            .map(ToString::to_string)
            .unwrap_or_else(|| panic!("missing column {column}"))
    }

    #[test]
    fn null_document_is_empty() {
        assert!(extract(&Value::Null).is_empty());
        assert!(extract(&json!("not a document")).is_empty());
    }

    #[test]
    fn empty_document_still_has_defaults() {
        let profile = extract(&json!({}));

        // no datoGeneral: personal columns are absent, not empty
        assert!(!profile.contains(Column::Nombres));
        assert!(!profile.contains(Column::Sexo));

        assert_eq!(cell(&profile, Column::EducacionUniversitaria), "");
        assert_eq!(cell(&profile, Column::ExperienciaLaboral), "");
        assert_eq!(cell(&profile, Column::TieneSentenciasPenales), "NO");
        assert_eq!(profile.get(Column::NumSentenciasPenales), Some(&Cell::Int(0)));
        assert_eq!(profile.get(Column::IngresoTotal), Some(&Cell::Number(0.0)));
        assert_eq!(profile.get(Column::ValorTotalVehiculos), Some(&Cell::Number(0.0)));
        assert_eq!(cell(&profile, Column::AnioIngresos), "");
    }

    #[test]
    fn general_data() {
        let profile = extract(&json!({
            "datoGeneral": {
                "nombres": "KEIKO SOFIA",
                "apellidoPaterno": "FUJIMORI",
                "apellidoMaterno": "HIGUCHI",
                "numeroDocumento": "10001088",
                "sexo": "2",
                "feNacimiento": "25/05/1975",
                "naciDistrito": "LIMA",
                "naciProvincia": "LIMA",
                "naciDepartamento": "LIMA",
                "domiDistrito": "SURCO",
                "domiProvincia": null,
                "estado": "INSCRITO"
            }
        }));

        assert_eq!(cell(&profile, Column::Nombres), "KEIKO SOFIA");
        assert_eq!(cell(&profile, Column::Dni), "10001088");
        assert_eq!(cell(&profile, Column::Sexo), "FEMENINO");
        assert_eq!(cell(&profile, Column::LugarNacimiento), "LIMA - LIMA - LIMA");
        assert_eq!(cell(&profile, Column::Domicilio), "SURCO -  - ");
        assert_eq!(cell(&profile, Column::EstadoCandidatura), "INSCRITO");
    }

    #[test]
    fn unknown_sex_code_is_blank() {
        let profile = extract(&json!({ "datoGeneral": { "sexo": "9" } }));
        assert_eq!(cell(&profile, Column::Sexo), "");

        let profile = extract(&json!({ "datoGeneral": { "sexo": "1" } }));
        assert_eq!(cell(&profile, Column::Sexo), "MASCULINO");
    }

    #[test]
    fn education_lists_are_joined() {
        let profile = extract(&json!({
            "formacionAcademica": {
                "educacionUniversitaria": [
                    { "universidad": "UNI", "carreraUni": "INGENIERIA", "concluidoEduUni": "SI" },
                    { "universidad": "PUCP", "carreraUni": "DERECHO", "concluidoEduUni": "NO" }
                ],
                "educacionPosgrado": [
                    { "txCenEstudioPosgrado": "COLUMBIA", "txEspecialidadPosgrado": "MBA" }
                ]
            }
        }));

        assert_eq!(
            cell(&profile, Column::EducacionUniversitaria),
            "UNI - INGENIERIA (Concluido) | PUCP - DERECHO (En curso)"
        );
        assert_eq!(cell(&profile, Column::Posgrados), "COLUMBIA - MBA");
    }

    #[test]
    fn work_history_keeps_first_five_in_order() {
        let jobs: Vec<Value> = (0..8)
            .map(|i| {
                json!({
                    "centroTrabajo": format!("EMPRESA {i}"),
                    "ocupacionProfesion": "GERENTE",
                    "anioTrabajoDesde": 2000 + i,
                    "anioTrabajoHasta": "2010"
                })
            })
            .collect();
        let profile = extract(&json!({ "experienciaLaboral": jobs }));

        let work = cell(&profile, Column::ExperienciaLaboral);
        let entries: Vec<&str> = work.split(SEPARATOR).collect();
        assert_eq!(entries.len(), MAX_WORK_HISTORY);
        assert_eq!(entries[0], "GERENTE en EMPRESA 0 (2000-2010)");
        assert_eq!(entries[4], "GERENTE en EMPRESA 4 (2004-2010)");
    }

    #[test]
    fn political_career() {
        let profile = extract(&json!({
            "trayectoria": {
                "cargoPartidario": [{
                    "cargoPartidario": "PRESIDENTA",
                    "orgPolCargoPartidario": "FUERZA POPULAR",
                    "anioCargoPartiDesde": "2010",
                    "anioCargoPartiHasta": null
                }],
                "cargoEleccion": [{
                    "cargoEleccion": "CONGRESISTA",
                    "orgPolCargoElec": "ALIANZA POR EL FUTURO",
                    "anioCargoElecDesde": "2006",
                    "anioCargoElecHasta": "2011"
                }]
            }
        }));

        assert_eq!(
            cell(&profile, Column::CargosPartidarios),
            "PRESIDENTA en FUERZA POPULAR (2010-)"
        );
        assert_eq!(
            cell(&profile, Column::CargosEleccionPrevios),
            "CONGRESISTA por ALIANZA POR EL FUTURO (2006-2011)"
        );
    }

    #[test]
    fn judgments_are_flagged_and_counted() {
        let profile = extract(&json!({
            "sentenciaPenal": [
                { "delito": "PECULADO", "fallo": "CONDENA" },
                { "delito": "COLUSION" }
            ],
            "sentenciaObliga": [{ "materia": "ALIMENTOS" }]
        }));

        assert_eq!(cell(&profile, Column::TieneSentenciasPenales), "SÍ");
        assert_eq!(profile.get(Column::NumSentenciasPenales), Some(&Cell::Int(2)));
        assert_eq!(
            cell(&profile, Column::DetalleSentenciasPenales),
            "PECULADO - CONDENA | COLUSION - "
        );
        assert_eq!(cell(&profile, Column::TieneSentenciasCiviles), "SÍ");
        assert_eq!(profile.get(Column::NumSentenciasCiviles), Some(&Cell::Int(1)));
    }

    #[test]
    fn income_comes_from_the_latest_declaration() {
        let profile = extract(&json!({
            "declaracionJurada": {
                "ingreso": [
                    {
                        "anioIngresos": "2024",
                        "totalIngresos": 120000.5,
                        "remuBrutaPublico": "80000",
                        "remuBrutaPrivado": null
                    },
                    { "anioIngresos": "2023", "totalIngresos": 1 }
                ]
            }
        }));

        assert_eq!(cell(&profile, Column::AnioIngresos), "2024");
        assert_eq!(profile.get(Column::IngresoTotal), Some(&Cell::Number(120000.5)));
        assert_eq!(profile.get(Column::IngresoPublico), Some(&Cell::Number(80000.0)));
        assert_eq!(profile.get(Column::IngresoPrivado), Some(&Cell::Number(0.0)));
    }

    #[test]
    fn asset_values_sum_valid_numbers_only() {
        let profile = extract(&json!({
            "declaracionJurada": {
                "bienInmueble": [
                    { "autoavaluo": 100000 },
                    { "autoavaluo": "50000.25" },
                    { "autoavaluo": "S/ 3,000" },
                    { "autoavaluo": null },
                    {}
                ],
                "bienMueble": [
                    { "valor": 25000 },
                    { "valor": "abc" }
                ]
            }
        }));

        assert_eq!(profile.get(Column::NumBienesInmuebles), Some(&Cell::Int(5)));
        assert_eq!(
            profile.get(Column::ValorTotalInmuebles),
            Some(&Cell::Number(150000.25))
        );
        assert_eq!(profile.get(Column::NumVehiculos), Some(&Cell::Int(2)));
        assert_eq!(profile.get(Column::ValorTotalVehiculos), Some(&Cell::Number(25000.0)));
    }

    #[test]
    fn wrong_types_fall_back() {
        let profile = extract(&json!({
            "experienciaLaboral": { "not": "a list" },
            "trayectoria": null,
            "declaracionJurada": { "ingreso": "n/a" }
        }));

        assert_eq!(cell(&profile, Column::ExperienciaLaboral), "");
        assert_eq!(cell(&profile, Column::CargosPartidarios), "");
        assert_eq!(profile.get(Column::IngresoTotal), Some(&Cell::Number(0.0)));
    }

    #[test]
    fn row_prepends_source_columns() {
        let keiko = crate::candidates::CANDIDATES[0];
        let profile = row(&keiko, &Value::Null);

        let columns: Vec<Column> = profile.iter().map(|(column, _)| column).collect();
        assert_eq!(
            columns,
            vec![
                Column::Partido,
                Column::Candidatura,
                Column::Persona,
                Column::IdHojaVida
            ]
        );
        assert_eq!(cell(&profile, Column::IdHojaVida), "245741");
    }
}
