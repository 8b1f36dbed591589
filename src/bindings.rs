use alloy::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IERC20Metadata {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
    }
);

// Call surfaces of the Hyp router variants. Bytecode comes from Foundry
// artifacts at runtime; these bindings only cover what the deployer calls
// after CREATE.

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IHypERC20 {
        function initialize(
            address _mailbox,
            address _interchainGasPaymaster,
            uint256 _totalSupply,
            string memory _name,
            string memory _symbol
        ) external;
    }
);

// Shared by HypNative and HypERC20Collateral.
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IHypAdapter {
        function initialize(address _mailbox, address _interchainGasPaymaster) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IHypRouter {
        function setInterchainSecurityModule(address _module) external;
        function enrollRemoteRouters(uint32[] memory _domains, bytes32[] memory _addresses) external;
    }
);
