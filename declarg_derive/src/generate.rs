mod parsed;
