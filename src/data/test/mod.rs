mod character_history;
