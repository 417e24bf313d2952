mod multistatus;
