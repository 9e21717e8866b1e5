//! End-to-end tests: a model declared in JSON, read and written through a store

use chrono::NaiveDate;
use rdfmap_attribute::{
    AttributeValue, FieldResolver, LocaleSelector, MemoryStore, ModelConfig, Resource, Scalar,
    StatementRead,
};
use rdfmap_graph_ir::{Datatype, Iri, Literal, StatementObject};
use serde_json::json;

const BOOK: &str = "http://example.org/books/1";
const DCT: &str = "http://purl.org/dc/terms/";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("rdfmap_attribute=trace")
        .with_test_writer()
        .try_init();
}

fn dct(local: &str) -> String {
    format!("{}{}", DCT, local)
}

fn book_model() -> ModelConfig {
    ModelConfig::from_json_value(json!({
        "codec": { "defaultLocale": "en", "allLocalesToken": "*" },
        "fields": {
            "title": { "predicate": dct("title"), "localized": true },
            "subject": { "predicate": dct("subject"), "multivalued": true },
            "creator": { "predicate": dct("creator"), "uri": true, "multivalued": true },
            "publisher": { "predicate": dct("publisher"), "uri": true },
            "issued": { "predicate": dct("issued"), "datatype": "http://www.w3.org/2001/XMLSchema#date" },
            "pages": { "predicate": dct("extent"), "datatype": "http://www.w3.org/2001/XMLSchema#integer" }
        }
    }))
    .unwrap()
}

#[test]
fn test_model_declares_fields() {
    let model = book_model();
    let fields = model.field_map();
    assert_eq!(fields.len(), 6);
    let issued = fields.resolve("issued").unwrap();
    assert_eq!(issued.datatype(), Some(&Datatype::xsd_date()));
    assert!(!issued.is_multivalued());
}

#[test]
fn test_write_then_read_every_field() {
    init_tracing();
    let model = book_model();
    let fields = model.field_map();
    let store = MemoryStore::new();
    let book = Resource::new(BOOK, &fields, &store, &model.codec);

    let issued = NaiveDate::from_ymd_opt(1865, 11, 26).unwrap();
    book.set_localized("title", "Alice's Adventures in Wonderland", "en").unwrap();
    book.set("subject", vec!["fantasy", "children"]).unwrap();
    book.set("creator", vec!["http://example.org/people/carroll "]).unwrap();
    book.set("publisher", " http://example.org/orgs/macmillan").unwrap();
    book.set("issued", issued).unwrap();
    book.set("pages", 192i64).unwrap();

    assert_eq!(
        book.get("title").unwrap(),
        AttributeValue::from("Alice's Adventures in Wonderland")
    );
    assert_eq!(
        book.get("subject").unwrap(),
        AttributeValue::from(vec!["fantasy", "children"])
    );
    assert_eq!(
        book.get("creator").unwrap(),
        AttributeValue::Many(vec![Scalar::iri("http://example.org/people/carroll")])
    );
    assert_eq!(
        book.get("publisher").unwrap(),
        AttributeValue::from(Iri::new("http://example.org/orgs/macmillan"))
    );
    assert_eq!(book.get("issued").unwrap(), AttributeValue::from(issued));
    assert_eq!(book.get("pages").unwrap(), AttributeValue::from(192i64));
    assert_eq!(store.len(), 7);
}

#[test]
fn test_statements_written_for_each_kind() {
    let model = book_model();
    let fields = model.field_map();
    let store = MemoryStore::new();
    let book = Resource::new(BOOK, &fields, &store, &model.codec);

    book.set("pages", 192i64).unwrap();
    book.set("publisher", "http://example.org/orgs/macmillan").unwrap();
    book.set_localized("title", "Alice", "en").unwrap();

    let subject = Iri::new(BOOK);
    assert_eq!(
        store.objects(&subject, &Iri::new(dct("extent"))).unwrap(),
        vec![StatementObject::typed(192i64, Datatype::xsd_integer())]
    );
    assert_eq!(
        store.objects(&subject, &Iri::new(dct("publisher"))).unwrap(),
        vec![StatementObject::iri("http://example.org/orgs/macmillan")]
    );
    assert_eq!(
        store.objects(&subject, &Iri::new(dct("title"))).unwrap(),
        vec![StatementObject::lang_string("Alice", "en")]
    );
}

#[test]
fn test_localized_title_across_locales() {
    let model = book_model();
    let fields = model.field_map();
    let store = MemoryStore::new();
    store.insert(BOOK, dct("title"), StatementObject::lang_string("Alice in Wonderland", "en"));
    store.insert(BOOK, dct("title"), StatementObject::lang_string("Alice au pays des merveilles", "fr"));
    let book = Resource::new(BOOK, &fields, &store, &model.codec);

    assert_eq!(
        book.get("title").unwrap(),
        AttributeValue::from("Alice in Wonderland")
    );
    assert_eq!(
        book.get_in("title", &model.codec.selector("fr")).unwrap(),
        AttributeValue::from("Alice au pays des merveilles")
    );
    assert!(book.get_in("title", &LocaleSelector::locale("de")).unwrap().is_absent());

    let all = book.get_in("title", &model.codec.selector("*")).unwrap();
    assert_eq!(all.as_many().map(<[Scalar]>::len), Some(2));
}

#[test]
fn test_typed_literals_from_store_decode_natively() {
    let model = book_model();
    let fields = model.field_map();
    let store = MemoryStore::new();
    store.insert(
        BOOK,
        dct("issued"),
        Literal::from_lexical("1865-11-26", Datatype::xsd_date()).into(),
    );
    store.insert(
        BOOK,
        dct("extent"),
        Literal::from_lexical("192", Datatype::xsd_integer()).into(),
    );
    let book = Resource::new(BOOK, &fields, &store, &model.codec);

    assert_eq!(
        book.get("issued").unwrap(),
        AttributeValue::from(NaiveDate::from_ymd_opt(1865, 11, 26).unwrap())
    );
    assert_eq!(book.get("pages").unwrap(), AttributeValue::from(192i64));
}

#[test]
fn test_lexical_and_native_values_store_one_term() {
    let model = book_model();
    let fields = model.field_map();
    let store = MemoryStore::new();
    store.insert(
        BOOK,
        dct("extent"),
        Literal::from_lexical("192", Datatype::xsd_integer()).into(),
    );
    let book = Resource::new(BOOK, &fields, &store, &model.codec);

    book.set("pages", "192").unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(book.get("pages").unwrap(), AttributeValue::from(192i64));
    assert_eq!(
        store.to_ntriples(),
        "<http://example.org/books/1> <http://purl.org/dc/terms/extent> \"192\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n"
    );
}

#[test]
fn test_undeclared_field_is_reported() {
    let model = book_model();
    let fields = model.field_map();
    let store = MemoryStore::new();
    let book = Resource::new(BOOK, &fields, &store, &model.codec);

    let err = book.set("isbn", "978-0-00-000000-0").unwrap_err();
    assert!(err.is_field_not_present());
    assert_eq!(err.error_type(), "err:attr/FieldNotPresent");
    assert!(book.get("isbn").unwrap_err().is_field_not_present());
    assert!(store.is_empty());
}

#[test]
fn test_ntriples_dump() {
    let model = book_model();
    let fields = model.field_map();
    let store = MemoryStore::new();
    let book = Resource::new(BOOK, &fields, &store, &model.codec);

    book.set("pages", 192i64).unwrap();
    book.set_localized("title", "Alice", "en").unwrap();

    assert_eq!(
        store.to_ntriples(),
        "<http://example.org/books/1> <http://purl.org/dc/terms/extent> \"192\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n\
         <http://example.org/books/1> <http://purl.org/dc/terms/title> \"Alice\"@en .\n"
    );
}
