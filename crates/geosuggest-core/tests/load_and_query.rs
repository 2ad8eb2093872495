use geosuggest_core::prelude::*;
use geosuggest_core::COORDINATE_SENTINEL;
use std::io::Write;
use std::sync::Arc;
use std::thread;

const HEADER: &str = "id\tname\tascii\talt_name\tlat\tlong\tfeat_class\tfeat_code\tcountry\tcc2\tadmin1\tadmin2\tadmin3\tadmin4\tpopulation\televation\tdem\ttz\tmodified_at";

const ROWS: &[&str] = &[
    "6167865\tToronto\tToronto\t\t43.70011\t-79.4163\tP\tPPLA\tCA\t\t08\t\t\t\t4612191\t\t175\tAmerica/Toronto\t2014-02-19",
    "6094817\tOttawa\tOttawa\t\t45.41117\t-75.69812\tP\tPPLC\tCA\t\t08\t\t\t\t812129\t\t71\tAmerica/Montreal\t2012-08-19",
    "6077243\tMontréal\tMontreal\t\t45.50884\t-73.58781\tP\tPPLA2\tCA\t\t10\t\t\t\t3268513\t\t60\tAmerica/Montreal\t2012-11-06",
    "6325494\tQuébec\tQuebec\t\t46.81228\t-71.21454\tP\tPPLA\tCA\t\t10\t\t\t\t528595\t\t68\tAmerica/Montreal\t2012-11-06",
    "5881791\tAbbotsford\tAbbotsford\t\t49.05798\t-122.25257\tP\tPPL\tCA\t\t02\t\t\t\t151683\t\t114\tAmerica/Vancouver\t2013-04-22",
    "4671654\tAustin\tAustin\t\t30.26715\t-97.74306\tP\tPPLA\tUS\t\tTX\t453\t\t\t790390\t149\t165\tAmerica/Chicago\t2011-05-14",
    "5128581\tNew York City\tNew York City\t\t40.71427\t-74.00597\tP\tPPL\tUS\t\tNY\t\t\t\t8175133\t10\t57\tAmerica/New_York\t2014-08-12",
    "6119109\tRouyn-Noranda\tRouyn-Noranda\t\tbad\t-79.01626\tP\tPPL\tCA\t\t10\t\t\t\t24602\t\t306\tAmerica/Montreal\t2008-04-11",
    "6000000\tLostville\tLostville\t\t50.0\t-90.0\tP\tPPL\tCA\t\t06\t\t\t\t1\t\t1\tAmerica/Toronto\t2008-04-11",
];

fn source() -> String {
    let mut s = String::from(HEADER);
    for row in ROWS {
        s.push('\n');
        s.push_str(row);
    }
    s.push('\n');
    s
}

fn write_source() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    file.write_all(source().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn builds_from_disk() {
    let file = write_source();
    let (index, report) =
        PlaceIndex::load_from_path(file.path(), &IngestConfig::default()).unwrap();

    assert_eq!(report.inserted, 8);
    assert_eq!(report.unmapped_region, 1);
    assert_eq!(index.stats().places, 8);

    let rouyn = index.store().get(6119109).unwrap();
    assert_eq!(rouyn.latitude, COORDINATE_SENTINEL);
    assert_eq!(rouyn.region, "QC");
}

#[test]
fn missing_source_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let result =
        PlaceIndex::load_from_path(dir.path().join("cities.tsv"), &IngestConfig::default());
    match result {
        Err(GeoSuggestError::NotFound(msg)) => assert!(msg.contains("cities.tsv")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn accented_query_finds_ascii_indexed_place() {
    let file = write_source();
    let (index, _) = PlaceIndex::load_from_path(file.path(), &IngestConfig::default()).unwrap();

    let prefix = strip_diacritics("Québ");
    let hits = index.find(&prefix, 46.8, -71.2);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Québec, QC, Canada");
    assert_eq!(SuggestionView::from(&hits[0]).latitude, "46.81228");
}

#[test]
fn every_prefix_of_every_name_resolves() {
    let file = write_source();
    let (index, _) = PlaceIndex::load_from_path(file.path(), &IngestConfig::default()).unwrap();

    for place in index.store().iter() {
        let key: String = fold_key(&place.name)
            .chars()
            .filter(char::is_ascii_lowercase)
            .collect();
        for k in 1..=key.len() {
            let node = index.trie().lookup(&key[..k]).expect("prefix indexed");
            assert!(node.ids().contains(&place.id), "{} missing at {}", place.name, &key[..k]);
        }
    }
}

#[test]
fn results_are_ordered_and_complete() {
    let file = write_source();
    let (index, _) = PlaceIndex::load_from_path(file.path(), &IngestConfig::default()).unwrap();

    let hits = index.find("o", 45.4, -75.7);
    assert_eq!(hits.len(), 1);
    let hits = index.find("a", 40.0, -100.0);
    assert_eq!(hits.len(), 2);
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn concurrent_readers_see_the_same_results() {
    let file = write_source();
    let (index, _) = PlaceIndex::load_from_path(file.path(), &IngestConfig::default()).unwrap();
    let index = Arc::new(index);
    let expected = index.find("mo", 45.5, -73.6);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || index.find("mo", 45.5, -73.6))
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[cfg(feature = "compact")]
#[test]
fn reads_gzip_sources() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let mut file = tempfile::Builder::new().suffix(".tsv.gz").tempfile().unwrap();
    {
        let mut enc = GzEncoder::new(file.as_file_mut(), Compression::default());
        enc.write_all(source().as_bytes()).unwrap();
        enc.finish().unwrap();
    }

    let (index, report) =
        PlaceIndex::load_from_path(file.path(), &IngestConfig::default()).unwrap();
    assert_eq!(report.inserted, 8);
    assert_eq!(index.find("new york", 40.7, -74.0).len(), 1);
}
