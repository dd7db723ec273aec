mod tests_verify;
