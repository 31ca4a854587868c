use std::fs;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serial_test::serial;

use crate::{
    functions::{
        account_stamp_duties, analyze_orders, analyze_portfolio, dossier_stamp_duties, summary,
        total_taxes,
    },
    parsing::{import_file, FileKind},
    structs::{DateRange, InstrumentType, Storage},
};

const DIR: &str = ".data_test/import";

const SECURITIES: &str = "Portafoglio titoli al 31/03/2024;;;;;
Titolo;ISIN;Simbolo;Mercato;Strumento;Valuta
Enel;IT0003128367;ENEL;MTA;Azione;EUR
BTP 2030;it0005413171;BTP30;MOT;Obbligazione;EUR
";

const ORDERS: &str = "Lista titoli movimentati;;;;;;;;;;;;;
Operazione;Data valuta;Isin;Descrizione;Segno;Quantita;Divisa;Prezzo;Cambio;Controvalore;Commissioni Fondi Sw/Ingr/Uscita;Commissioni Fondi Banca Corrispondente;Spese Fondi Sgr;Commissioni amministrato
15/01/2024;17/01/2024;IT0003128367;Enel;A;10;EUR;6;;60;0;0;0;2
12/01/2024;16/01/2024;IT0005413171;BTP 2030;A;1000;EUR;98,50;;985;0;0;0;0
20/02/2024;22/02/2024;IT0003128367;Enel;A;10;EUR;7;;70;0;0;0;2
01/03/2024;01/03/2024;IT0005413171;Stacco cedole BTP 2030;;0;EUR;0;;12,50;0;0;0;0
05/03/2024;07/03/2024;IT0003128367;Enel;V;5;EUR;8;;40;0;0;0;2
20/03/2024;20/03/2024;IT0003128367;Dividendo Enel;V;0;EUR;0;;3;0;0;0;0
data errata;;IT0003128367;Enel;A;1;EUR;6;;6;0;0;0;0
";

const MOVEMENTS: &str = "Conto corrente 000123;;;;;
Data_Operazione;Data_Valuta;Descrizione;Descrizione_Completa;Entrate;Uscite
02/01/2024;02/01/2024;Bonifico;Bonifico da Mario Rossi;2.000,00;
10/01/2024;10/01/2024;Compravendita titoli;Compravendita titoli ENEL;;-130,00
31/03/2024;31/03/2024;Imposta bollo conto corrente;Imposta bollo conto corrente periodo 31.03.2024;;-8,55
31/03/2024;31/03/2024;Imposta bollo dossier titoli;Imposta bollo dossier titoli 000123;;-1,20
";

fn write_exports() -> [String; 3] {
    fs::create_dir_all(DIR).unwrap();
    let files = [
        (format!("{DIR}/titoli.csv"), SECURITIES),
        (format!("{DIR}/ordini_2024.csv"), ORDERS),
        (format!("{DIR}/movimenti_2024.csv"), MOVEMENTS),
    ];
    for (path, content) in &files {
        fs::write(path, content).unwrap();
    }
    files.map(|(path, _)| path)
}

#[test]
#[serial]
fn import_exports_and_analyze_portfolio() {
    let paths = write_exports();
    let mut storage = Storage::non_persistent().unwrap();

    let reports: Vec<_> = paths
        .iter()
        .map(|path| import_file(path, b';', &mut storage).unwrap())
        .collect();
    assert_eq!(reports[0].kind, FileKind::Securities);
    assert_eq!(reports[0].inserted, 2);
    assert_eq!(reports[1].kind, FileKind::Orders);
    assert_eq!(reports[1].inserted, 6);
    assert_eq!(reports[1].rejected, 1);
    assert_eq!(reports[2].kind, FileKind::Movements);
    assert_eq!(reports[2].inserted, 4);

    // Importing the same export again adds nothing
    let again = import_file(&paths[1], b';', &mut storage).unwrap();
    assert_eq!(again.inserted, 0);
    assert_eq!(again.duplicates, 6);

    let portfolio = analyze_portfolio(&storage.orders, &storage.securities);
    assert_eq!(portfolio.securities.len(), 2);

    let enel = &portfolio.securities[0];
    assert_eq!(enel.isin, "IT0003128367");
    assert_eq!(enel.name.as_deref(), Some("Enel"));
    assert_eq!(enel.orders, 4);
    assert_eq!(enel.result.avg_buy_price, dec!(6.50));
    assert_eq!(enel.result.avg_sell_price, dec!(8));
    assert_eq!(enel.result.net_quantity, dec!(15));
    assert_eq!(enel.result.cost_basis, dec!(130));
    assert_eq!(enel.result.net_proceeds, dec!(4.50));
    assert_eq!(enel.result.total_fees, dec!(6));
    assert_eq!(enel.result.yield_ratio, dec!(0.0346));

    let btp = &portfolio.securities[1];
    assert_eq!(btp.isin, "IT0005413171");
    assert_eq!(btp.instrument_type, InstrumentType::Bond);
    // 0.985 once divided by 100, shown to the cent with half-even rounding
    assert_eq!(btp.result.avg_buy_price, dec!(0.98));
    assert_eq!(btp.result.cost_basis, dec!(985));
    assert_eq!(btp.result.book_value, dec!(997.50));
    assert_eq!(btp.result.net_proceeds, dec!(12.50));
    assert!(!btp.result.has_sales());
    assert_eq!(btp.result.yield_ratio, dec!(0));

    assert_eq!(portfolio.total_cost_basis, dec!(1115));
    assert_eq!(portfolio.total_net_proceeds, dec!(17));
    assert_eq!(portfolio.total_fees, dec!(6));
    assert_eq!(portfolio.total_book_value, dec!(1099.50));

    // Without a registered instrument the bond prices stay per 100
    let btp_orders = storage.orders.get_by_isin("IT0005413171");
    let unknown = analyze_orders(&btp_orders, &InstrumentType::Other(String::new()));
    assert_eq!(unknown.avg_buy_price, dec!(98.50));

    fs::remove_dir_all(DIR).unwrap();
}

#[test]
#[serial]
fn import_exports_and_summarize_account() {
    let paths = write_exports();
    let mut storage = Storage::non_persistent().unwrap();
    for path in &paths {
        import_file(path, b';', &mut storage).unwrap();
    }

    let today = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
    let summary = summary(&storage.movements, &storage.orders, today);
    assert_eq!(summary.liquidity, dec!(1860.25));
    assert_eq!(summary.investments, dec!(-1059.50));
    assert_eq!(summary.patrimony, dec!(800.75));
    assert_eq!(summary.liquidity_last_30_days, dec!(-9.75));
    assert_eq!(summary.investments_last_30_days, dec!(3));

    let account = account_stamp_duties(&storage.movements, DateRange::all());
    assert_eq!(account.len(), 1);
    assert_eq!(account[0].amount, dec!(8.55));
    assert_eq!(account[0].reference_date, NaiveDate::from_ymd_opt(2024, 3, 31));

    let dossier = dossier_stamp_duties(&storage.movements, DateRange::all());
    assert_eq!(dossier.len(), 1);
    assert_eq!(dossier[0].dossier.as_deref(), Some("000123"));

    let first_quarter = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1),
        NaiveDate::from_ymd_opt(2024, 3, 31),
    )
    .unwrap();
    assert_eq!(total_taxes(&storage.movements, first_quarter), dec!(9.75));

    fs::remove_dir_all(DIR).unwrap();
}

#[test]
#[serial]
fn imported_data_survives_reopening() {
    let paths = write_exports();
    let data_dir = format!("{DIR}/data");
    {
        let mut storage = Storage::open(&data_dir).unwrap();
        import_file(&paths[1], b';', &mut storage).unwrap();
        storage.save().unwrap();
    }

    let storage = Storage::open(&data_dir).unwrap();
    assert_eq!(storage.orders.len(), 6);
    assert!(storage.movements.is_empty());
    drop(storage);

    fs::remove_dir_all(DIR).unwrap();
}
