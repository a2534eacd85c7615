mod storage_mappings;
