mod document_test;
mod language_test;
