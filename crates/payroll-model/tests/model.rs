use payroll_model::{
    CanonicalField, ColumnMap, EmployeeProfile, PayrollFigures, PensionRegime, PeriodValue,
    ProcessedRecord,
};

#[test]
fn column_map_serializes_by_field_key() {
    let mut map = ColumnMap::new();
    map.bind(CanonicalField::Dni, "DNI", 0);
    map.bind(CanonicalField::FullName, "APELLIDOS Y NOMBRES", 1);

    let json = serde_json::to_value(&map).expect("serialize map");
    assert_eq!(json["dni"]["header"], "DNI");
    assert_eq!(json["fullName"]["index"], 1);

    let round: ColumnMap = serde_json::from_value(json).expect("deserialize map");
    assert_eq!(round, map);
}

#[test]
fn column_map_iterates_in_declaration_order() {
    let mut map = ColumnMap::new();
    map.bind(CanonicalField::Essalud, "ESSALUD", 5);
    map.bind(CanonicalField::Dni, "DNI", 0);
    map.bind(CanonicalField::Period, "MES", 2);

    let fields: Vec<CanonicalField> = map.iter().map(|(field, _)| field).collect();
    assert_eq!(
        fields,
        vec![CanonicalField::Dni, CanonicalField::Period, CanonicalField::Essalud]
    );
}

#[test]
fn processed_record_roundtrips_through_json() {
    let record = ProcessedRecord {
        id: "12345678-0".to_string(),
        row_index: 0,
        employee: EmployeeProfile {
            full_name: "QUISPE ROSA".to_string(),
            dni: "12345678".to_string(),
            pension_regime: PensionRegime::Spp,
            ..EmployeeProfile::default()
        },
        payroll: PayrollFigures {
            base_salary: 1500.0,
            spp_total: 190.5,
            pension_regime: PensionRegime::Spp,
            ..PayrollFigures::default()
        },
        period: PeriodValue::valid(2025, 7),
        is_valid: true,
        errors: Vec::new(),
    };

    let json = serde_json::to_string(&record).expect("serialize record");
    assert!(json.contains("\"pension_regime\":\"SPP\""));
    let round: ProcessedRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}
