mod import_and_analyze;
