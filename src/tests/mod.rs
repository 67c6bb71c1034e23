mod test_data;
