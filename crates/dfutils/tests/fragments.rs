use dfutils::prelude::*;
use dfutils::{DEFAULT_KEY_COLUMN, DEFAULT_VALUE_COLUMN, FragmentDefaults, SURROGATE_KEY_NULL};

#[test]
fn deduplicate_has_one_qualify_clause() {
    let sql = deduplicate("t", "a", "b");
    assert!(sql.contains("FROM t"));
    assert_eq!(
        sql.matches("QUALIFY ROW_NUMBER() OVER (PARTITION BY a ORDER BY b ) = 1")
            .count(),
        1
    );
}

#[test]
fn surrogate_key_exact_text() {
    assert_eq!(
        generate_surrogate_key(["a", "b"]),
        format!(
            "to_hex(md5(coalesce(cast(a as string), '{n}') || '-' || coalesce(cast(b as string), '{n}')))",
            n = SURROGATE_KEY_NULL
        )
    );
}

#[test]
fn surrogate_key_single_and_custom_null() {
    assert!(!generate_surrogate_key(["a"]).contains("||"));

    let sql = generate_surrogate_key_with_null(["a", "b"], "X");
    assert_eq!(
        sql,
        "to_hex(md5(coalesce(cast(a as string), 'X') || '-' || coalesce(cast(b as string), 'X')))"
    );
}

#[test]
fn union_relations_tags_each_branch() {
    let sql = union_relations(
        [("r1", "tableA"), ("r2", "tableB")],
        ["*"],
        DEFAULT_KEY_COLUMN,
        DEFAULT_VALUE_COLUMN,
    );
    let branches: Vec<&str> = sql.split("\nUNION ALL\n").collect();
    assert_eq!(branches.len(), 2);
    assert!(branches[0].contains("'r1' AS _dataform_source_key"));
    assert!(branches[0].contains("'tableA' AS _dataform_source_relation"));
    assert!(branches[0].ends_with("FROM tableA"));
    assert!(branches[1].contains("'r2' AS _dataform_source_key"));
    assert!(branches[1].ends_with("FROM tableB"));
}

#[test]
fn all_generators_are_pure() {
    assert_eq!(deduplicate("t", "a", "b"), deduplicate("t", "a", "b"));
    assert_eq!(
        generate_surrogate_key(["a", "b"]),
        generate_surrogate_key(["a", "b"])
    );
    let rels = Relations::from([("r1", "tableA"), ("r2", "tableB")]);
    assert_eq!(
        UnionRelations::new(rels.clone()).to_sql(),
        UnionRelations::new(rels).to_sql()
    );
}

#[test]
fn builders_usable_across_threads() {
    let key = SurrogateKey::new(["id"]);
    let expected = key.to_sql();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let key = key.clone();
            std::thread::spawn(move || key.to_sql())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn defaults_file_drives_all_builders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dfutils.toml");
    std::fs::write(
        &path,
        r#"
[surrogate_key]
null_value = "__null__"

[union_relations]
fields = ["id", "amount"]
key_column_name = "shop"
source_column_name = "origin"
"#,
    )
    .unwrap();

    let defaults = FragmentDefaults::load(&path).unwrap();

    let key = SurrogateKey::from_defaults(&defaults).field("id").to_sql();
    assert_eq!(key, "to_hex(md5(coalesce(cast(id as string), '__null__')))");

    let sql = UnionRelations::from_defaults(&defaults)
        .relation("eu", "orders_eu")
        .try_to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT id, amount, 'eu' AS shop, 'orders_eu' AS origin FROM orders_eu"
    );
}

#[test]
fn strict_paths_surface_validation_errors() {
    let err = Deduplicate::new("t").try_to_sql().unwrap_err();
    assert!(matches!(err, DfError::Validation(_)));
    assert!(err.to_string().starts_with("Validation error:"));

    let res: DfResult<String> = SurrogateKey::default().try_to_sql();
    assert!(res.is_err());
}
